//! Publisher classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of rate publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Central bank reference rate (single value per currency)
    Official,
    /// Commercial bank or aggregator quoting buy/sell prices
    Commercial,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Official => write!(f, "official"),
            SourceKind::Commercial => write!(f, "commercial"),
        }
    }
}
