//! Provider error types.

use thiserror::Error;

/// Errors raised while fetching or parsing one source.
#[derive(Debug, Error)]
pub enum DataError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// XML feed could not be read
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Expected markup was not found on the page
    #[error("markup not found: {0}")]
    MarkupNotFound(String),

    /// Page parsed but yielded no usable rate
    #[error("no rates extracted from {source_id}")]
    NoRates { source_id: String },
}

impl From<quick_xml::Error> for DataError {
    fn from(err: quick_xml::Error) -> Self {
        DataError::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
