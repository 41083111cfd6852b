//! Combined rate snapshot.
//!
//! Output shape:
//!
//! ```json
//! {
//!     "date": "02.02.2026",
//!     "timestamp": "2026-02-02T09:15:00+02:00",
//!     "sources": {
//!         "bnm": { "name": "...", "type": "official", "rates": { "eur": 19.94 } },
//!         "maib": { "name": "maib", "type": "commercial", "rates": { "eur": { "buy": 19.7, "sell": 20.1 } } }
//!     }
//! }
//! ```

use crate::error::{CursError, Result};
use crate::types::{CurrencyCode, Rate, RateTable, SourceKind};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format used in the snapshot envelope and by the official feed.
pub const SNAPSHOT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Rates collected from one publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReport {
    /// Human-readable publisher name
    pub name: String,
    /// Official or commercial
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// Per-unit rates against MDL
    pub rates: RateTable,
}

impl SourceReport {
    pub fn new(name: impl Into<String>, kind: SourceKind, rates: RateTable) -> Self {
        Self {
            name: name.into(),
            kind,
            rates,
        }
    }

    /// Looks up a currency, treating MDL as the implicit 1.0 base.
    pub fn rate(&self, code: &CurrencyCode) -> Option<Rate> {
        match self.rates.get(code) {
            Some(rate) => Some(*rate),
            None if code.is_mdl() => Some(match self.kind {
                SourceKind::Official => Rate::Official(1.0),
                SourceKind::Commercial => Rate::Commercial {
                    buy: 1.0,
                    sell: 1.0,
                },
            }),
            None => None,
        }
    }
}

/// One collection run across all sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rate date (`dd.mm.yyyy`)
    pub date: String,
    /// Collection time
    pub timestamp: DateTime<FixedOffset>,
    /// Reports keyed by source id
    pub sources: BTreeMap<String, SourceReport>,
}

impl Snapshot {
    pub fn new(date: NaiveDate, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            date: date.format(SNAPSHOT_DATE_FORMAT).to_string(),
            timestamp,
            sources: BTreeMap::new(),
        }
    }

    /// Overrides the envelope date (e.g. with the official publication date).
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.format(SNAPSHOT_DATE_FORMAT).to_string();
    }

    pub fn insert(&mut self, id: impl Into<String>, report: SourceReport) {
        self.sources.insert(id.into(), report);
    }

    pub fn source(&self, id: &str) -> Result<&SourceReport> {
        self.sources
            .get(id)
            .ok_or_else(|| CursError::UnknownSource(id.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Serializes with 4-space indentation, non-ASCII kept verbatim.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| CursError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    fn sample() -> Snapshot {
        let ts = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 2, 2, 9, 15, 0)
            .unwrap();
        let mut snapshot = Snapshot::new(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(), ts);

        let mut official = RateTable::new();
        official.insert(CurrencyCode::mdl(), Rate::Official(1.0));
        official.insert(code("eur"), Rate::Official(19.9487));
        snapshot.insert(
            "bnm",
            SourceReport::new("Banca Națională a Moldovei", SourceKind::Official, official),
        );

        let mut commercial = RateTable::new();
        commercial.insert(code("usd"), Rate::commercial(16.9, 17.25).unwrap());
        snapshot.insert("maib", SourceReport::new("maib", SourceKind::Commercial, commercial));
        snapshot
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&sample().to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["date"], "02.02.2026");
        assert_eq!(value["timestamp"], "2026-02-02T09:15:00+02:00");
        assert_eq!(value["sources"]["bnm"]["type"], "official");
        assert_eq!(value["sources"]["bnm"]["rates"]["eur"], 19.9487);
        assert_eq!(value["sources"]["maib"]["type"], "commercial");
        assert_eq!(value["sources"]["maib"]["rates"]["usd"]["sell"], 17.25);
    }

    #[test]
    fn test_pretty_output_keeps_unicode_and_indent() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.contains("Banca Națională a Moldovei"));
        assert!(json.contains("\n    \"date\""));
    }

    #[test]
    fn test_round_trip_through_json() {
        let snapshot = sample();
        let parsed = Snapshot::from_json(&snapshot.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_implicit_mdl() {
        let snapshot = sample();
        let maib = snapshot.source("maib").unwrap();
        assert_eq!(
            maib.rate(&CurrencyCode::mdl()),
            Some(Rate::Commercial { buy: 1.0, sell: 1.0 })
        );
        assert_eq!(maib.rate(&code("gbp")), None);
        assert!(snapshot.source("nope").is_err());
    }

    #[test]
    fn test_set_date() {
        let mut snapshot = sample();
        snapshot.set_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(snapshot.date, "31.01.2026");
    }
}
