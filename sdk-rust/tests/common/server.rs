use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

/// What a stub route answers with.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Json(body) => Json(body).into_response(),
            Self::Status(status) => status.into_response(),
            Self::Raw(body) => body.into_response(),
        }
    }
}

pub fn reply(reply: Reply) -> MethodRouter {
    get(move || {
        let reply = reply.clone();
        async move { reply }
    })
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let address = listener.local_addr().expect("test server address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server runs");
    });

    format!("http://{address}")
}
