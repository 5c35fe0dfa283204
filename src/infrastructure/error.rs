use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid search URL {0}: {1}")]
    InvalidUrl(String, String),
}
