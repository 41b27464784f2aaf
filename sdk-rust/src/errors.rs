use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// A configured header or request parameter could not be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream resource answered with a non-success status code.
    #[error("Upstream call failed: {} {status_text}", .status.as_u16())]
    Upstream {
        status: reqwest::StatusCode,
        /// Canonical reason phrase for `status`, e.g. `"Not Found"`.
        status_text: String,
    },
    /// The response body does not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The content API has no record with the requested identifier.
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DataResult<T> = Result<T, DataError>;
