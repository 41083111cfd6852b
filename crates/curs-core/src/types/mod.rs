//! Core value types.
//!
//! - `CurrencyCode` - validated lowercase ISO-like currency code
//! - `Rate` - official reference rate or commercial buy/sell pair
//! - `SourceKind` - official vs commercial publisher

pub mod currency;
pub mod rate;
pub mod source;

pub use currency::CurrencyCode;
pub use rate::{Rate, RateTable};
pub use source::SourceKind;
