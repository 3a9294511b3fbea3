use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while fetching the source page. Fetch failure is the one
/// fatal condition in the whole tool; the scraper itself never errors,
/// it skips what it cannot read.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("MediaWiki API error [{code}]: {info}")]
    Api { code: String, info: String },

    #[error("malformed API response: {0}")]
    Malformed(String),

    #[error("response too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}
