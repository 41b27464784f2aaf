use crate::{DataError, DataResult};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Issue a GET request and parse the JSON body.
/// Returns `DataError::Upstream` on any non-success status code. HTTP/2 and
/// most HTTP/1.1 clients never see the server's reason phrase, so
/// `status_text` is the canonical reason for the status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
) -> DataResult<R> {
    let response = client.get(url).headers(headers).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Upstream {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Convert user supplied header pairs into a `HeaderMap`.
/// `source` names the client in error messages.
pub fn build_headers(source: &str, headers: &HashMap<String, String>) -> DataResult<HeaderMap> {
    let mut header_map = HeaderMap::new();

    for (key, value) in headers {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
            DataError::InvalidInput(format!("Invalid {source} header name '{key}': {error}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            DataError::InvalidInput(format!(
                "Invalid {source} header value for '{key}': {error}"
            ))
        })?;
        header_map.insert(header_name, header_value);
    }

    Ok(header_map)
}
