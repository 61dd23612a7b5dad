use reqwest::Method;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Any way a request to the Item Service can fail
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{method} {url} returned HTTP {status}")]
    Status { method: Method, url: String, status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
