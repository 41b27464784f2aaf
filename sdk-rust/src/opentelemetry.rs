use crate::{DataError, DataResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Span covering one outbound read against an external data source.
pub struct FetchSpan {
    span: Span,
    start_time: Instant,
    status_code: Option<u16>,
    ended: bool,
}

impl FetchSpan {
    pub fn new(source: &str, resource: &str, url: &str) -> Self {
        let span = info_span!("portfolio_sdk.fetch");
        span.set_attribute("http.request.method", "GET");
        span.set_attribute("url.full", url.to_string());
        span.set_attribute("portfolio_sdk.source", source.to_string());
        span.set_attribute("portfolio_sdk.resource", resource.to_string());

        Self {
            span,
            start_time: Instant::now(),
            status_code: None,
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_success(&mut self) {
        self.status_code.get_or_insert(200);
    }

    pub fn on_error(&mut self, error: &DataError) {
        if let DataError::Upstream { status, .. } = error {
            self.status_code = Some(status.as_u16());
        }
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(status_code) = self.status_code {
            self.span
                .set_attribute("http.response.status_code", i64::from(status_code));
        }
        self.span.set_attribute(
            "portfolio_sdk.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

impl Drop for FetchSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

/// Run `f` inside a fetch span, recording the outcome on the span.
pub async fn trace_fetch<T, F, Fut>(source: &str, resource: &str, url: &str, f: F) -> DataResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DataResult<T>>,
{
    let mut span = FetchSpan::new(source, resource, url);
    let result = span.instrument_future(f()).await;

    match &result {
        Ok(_) => span.on_success(),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
