//! Error types for lesson fetching and caching

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LessonError>;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No readable lesson content found at {0}")]
    NoContent(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cache index: {0}")]
    InvalidIndex(#[from] serde_json::Error),
}
