use super::client::{ContentClient, ContentRequest, ContentTarget};
use crate::{client_utils, DataError, DataResult};
use reqwest::{header::HeaderMap, Client, StatusCode, Url};
use serde_json::Value;
use std::collections::HashMap;

const SOURCE: &str = "microcms";

#[derive(Clone, Default)]
pub struct HttpContentClientOptions {
    /// Extra headers for every request, e.g. the service's API key header.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

/// `ContentClient` for microCMS-style REST APIs:
/// `GET {base}/{endpoint}?offset=&limit=` and `GET {base}/{endpoint}/{id}`.
pub struct HttpContentClient {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

impl HttpContentClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, options: HttpContentClientOptions) -> Self {
        let HttpContentClientOptions { headers, client } = options;
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }

    /// Client for a hosted microCMS service, addressed by its subdomain.
    #[must_use]
    pub fn for_service(service_domain: &str, options: HttpContentClientOptions) -> Self {
        Self::new(
            format!("https://{service_domain}.microcms.io/api/v1"),
            options,
        )
    }

    fn request_headers(&self) -> DataResult<HeaderMap> {
        client_utils::build_headers(SOURCE, &self.headers)
    }

    fn request_url(&self, request: &ContentRequest) -> DataResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|error| {
            DataError::InvalidInput(format!(
                "Invalid content API base URL '{}': {error}",
                self.base_url
            ))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                DataError::InvalidInput(format!(
                    "Content API base URL '{}' cannot take a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push(&request.endpoint);
            if let ContentTarget::Item { content_id } = &request.target {
                segments.push(content_id);
            }
        }

        if let ContentTarget::List { offset, limit } = &request.target {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string())
                .append_pair("limit", &limit.to_string());
        }

        Ok(url)
    }
}

#[async_trait::async_trait]
impl ContentClient for HttpContentClient {
    async fn get(&self, request: ContentRequest) -> DataResult<Value> {
        let url = self.request_url(&request)?;
        let headers = self.request_headers()?;

        let result = crate::opentelemetry::trace_fetch(
            SOURCE,
            &request.endpoint,
            url.as_str(),
            || client_utils::get_json(&self.client, url.as_str(), headers),
        )
        .await;

        match (result, &request.target) {
            (
                Err(DataError::Upstream {
                    status: StatusCode::NOT_FOUND,
                    ..
                }),
                ContentTarget::Item { content_id },
            ) => Err(DataError::NotFound(content_id.clone())),
            (result, _) => result,
        }
    }
}
