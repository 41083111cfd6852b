//! Error types shared across the workspace.

use thiserror::Error;

/// Core domain error.
#[derive(Debug, Error)]
pub enum CursError {
    /// Not a three-letter currency code
    #[error("invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Negative, NaN or infinite rate value
    #[error("invalid rate value: {0}")]
    InvalidRate(f64),

    /// Nominal must be strictly positive
    #[error("invalid nominal: {0}")]
    InvalidNominal(f64),

    /// Currency absent from a source's table
    #[error("currency {currency} not quoted by source {source_id}")]
    UnknownCurrency {
        source_id: String,
        currency: String,
    },

    /// Source absent from a snapshot
    #[error("source not found in snapshot: {0}")]
    UnknownSource(String),

    /// Amount is not a finite number
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// A conversion leg has a zero rate
    #[error("zero rate for {0}, cannot convert")]
    ZeroRate(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CursError {
    fn from(err: serde_json::Error) -> Self {
        CursError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for CursError {
    fn from(err: config::ConfigError) -> Self {
        CursError::Config(err.to_string())
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CursError>;
