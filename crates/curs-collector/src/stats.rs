//! Collection statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-run source counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Sources attempted
    pub total: usize,
    /// Sources that contributed rates
    pub success: usize,
    /// Transport, status or markup failures
    pub errors: usize,
    /// Pages fetched but without a usable rate
    pub empty: usize,
    /// Rates written across all sources
    pub total_rates: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Success rate in percent.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            empty = self.empty,
            total_rates = self.total_rates,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "collection finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        assert_eq!(CollectionStats::new().success_rate(), 0.0);

        let stats = CollectionStats {
            total: 4,
            success: 3,
            errors: 1,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), 75.0);
    }
}
