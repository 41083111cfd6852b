//! Exchange-rate sources.
//!
//! This crate provides:
//! - the [`RateProvider`] contract and one provider per publisher
//! - a shared HTTP client
//! - extraction helpers for locale-formatted numbers, currency labels and HTML tables
//! - a [`ProviderRegistry`] holding the configured sources in collection order

pub mod error;
pub mod http;
pub mod parse;
pub mod provider;
pub mod registry;

pub use error::{DataError, Result};
pub use http::HttpClient;
pub use provider::{
    BnmProvider, ComertbankProvider, CursMdProvider, EcbProvider, EnergbankProvider,
    EximbankProvider, FincombankProvider, MaibProvider, MicbProvider, OtpProvider,
    ProcreditProvider, RateProvider, SourceRates, VictoriabankProvider,
};
pub use registry::ProviderRegistry;
