use std::error::Error as _;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    /// Transport failure; the request URL is stripped since its query carries the API key.
    #[error("HTTP error: {}", with_causes(.0))]
    Http(reqwest::Error),

    #[error("API call failed with code: {code}")]
    Status { code: u16 },

    #[error("Empty response body")]
    EmptyBody,

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NewsError>;

impl From<reqwest::Error> for NewsError {
    fn from(err: reqwest::Error) -> Self {
        NewsError::Http(err.without_url())
    }
}

/// reqwest keeps the OS-level cause (e.g. "Connection refused") in its source chain.
fn with_causes(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
