//! One collection pass over the registry.

use crate::config::CollectorConfig;
use crate::error::{CollectorError, Result};
use crate::modules::output::save_snapshot;
use crate::stats::CollectionStats;
use chrono::{DateTime, FixedOffset, Local};
use curs_core::{Snapshot, SourceKind};
use curs_data::{DataError, HttpClient, ProviderRegistry};
use std::time::Instant;

/// Fetches every provider in order and assembles a snapshot.
///
/// Providers run one at a time. A failing provider is logged and left out
/// of the snapshot; it never aborts the run. The snapshot date is the
/// official source's published date when it reports one, otherwise the
/// local date of `now`.
pub async fn collect_snapshot(
    registry: &ProviderRegistry,
    http: &HttpClient,
    now: DateTime<FixedOffset>,
) -> (Snapshot, CollectionStats) {
    let started = Instant::now();
    let today = now.date_naive();

    let mut snapshot = Snapshot::new(today, now);
    let mut stats = CollectionStats::new();

    for provider in registry.iter() {
        stats.total += 1;
        let id = provider.id();

        match provider.fetch(http, today).await {
            Ok(parsed) => {
                if provider.kind() == SourceKind::Official {
                    if let Some(published) = parsed.published {
                        snapshot.set_date(published);
                    }
                }
                stats.success += 1;
                stats.total_rates += parsed.rates.len();
                tracing::info!(source = id, rates = parsed.rates.len(), "source collected");
                snapshot.insert(id, provider.report(parsed.rates));
            }
            Err(e @ DataError::NoRates { .. }) => {
                stats.empty += 1;
                tracing::warn!(source = id, "{}", e);
            }
            Err(e) => {
                stats.errors += 1;
                tracing::warn!(source = id, error = %e, "source failed");
            }
        }
    }

    stats.elapsed = started.elapsed();
    (snapshot, stats)
}

/// Collects with `config` and writes the snapshot file.
///
/// Nothing is written when every source failed.
pub async fn run_collect(config: &CollectorConfig) -> Result<CollectionStats> {
    let http = HttpClient::new(&config.app.http)?;
    let registry = ProviderRegistry::from_config(&config.app.sources);
    if registry.is_empty() {
        return Err(CollectorError::Config(
            "no source enabled by the current configuration".to_string(),
        ));
    }
    tracing::info!(sources = ?registry.ids(), "collecting");

    let (snapshot, stats) = collect_snapshot(&registry, &http, Local::now().fixed_offset()).await;
    if snapshot.is_empty() {
        return Err(CollectorError::NoSources);
    }

    let path = config.output_path();
    save_snapshot(&snapshot, path)?;
    tracing::info!(path = %path.display(), sources = snapshot.len(), "snapshot saved");

    Ok(stats)
}
