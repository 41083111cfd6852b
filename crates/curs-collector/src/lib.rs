//! Exchange-rate collector.
//!
//! Runs every enabled provider once, assembles a [`Snapshot`](curs_core::Snapshot)
//! and writes it as JSON. Also answers conversions from a saved snapshot.

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use stats::CollectionStats;
