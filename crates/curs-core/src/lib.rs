//! # Curs Core
//!
//! Core domain model shared by the rate providers and the collector:
//! - currency codes, source kinds and official/commercial rates
//! - the combined snapshot written for downstream consumers
//! - amount conversion over a collected source
//! - configuration management
//! - logging infrastructure

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use self::config::{
    AppConfig, HttpConfig, LoggingConfig, OutputConfig, SourcesConfig, DEFAULT_CONFIG_PATH,
};
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
