//! Collector error types.

use std::fmt;

/// Collector error.
#[derive(Debug)]
pub enum CollectorError {
    /// Configuration could not be loaded
    Config(String),
    /// Provider or HTTP client failure
    Data(curs_data::DataError),
    /// Snapshot or conversion failure
    Domain(curs_core::CursError),
    /// Reading or writing a snapshot file
    Io(std::io::Error),
    /// Every source failed; nothing to write
    NoSources,
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Data(e) => write!(f, "Data source error: {}", e),
            Self::Domain(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::NoSources => write!(f, "No source returned rates"),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Data(e) => Some(e),
            Self::Domain(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(_) | Self::NoSources => None,
        }
    }
}

impl From<curs_data::DataError> for CollectorError {
    fn from(err: curs_data::DataError) -> Self {
        Self::Data(err)
    }
}

impl From<curs_core::CursError> for CollectorError {
    fn from(err: curs_core::CursError) -> Self {
        Self::Domain(err)
    }
}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias.
pub type Result<T> = std::result::Result<T, CollectorError>;
