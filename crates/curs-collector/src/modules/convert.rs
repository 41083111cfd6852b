//! Conversion against a saved snapshot.

use crate::error::Result;
use crate::modules::output::load_snapshot;
use curs_core::{convert, Conversion, CurrencyCode};
use std::path::Path;

/// Converts `amount` of `from` into `to` with the rates of `source_id` in
/// the snapshot stored at `path`.
pub fn convert_from_file(
    path: &Path,
    source_id: &str,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<Conversion> {
    let snapshot = load_snapshot(path)?;
    let report = snapshot.source(source_id)?;

    let from = CurrencyCode::parse(from)?;
    let to = CurrencyCode::parse(to)?;
    Ok(convert(report, source_id, amount, &from, &to)?)
}
