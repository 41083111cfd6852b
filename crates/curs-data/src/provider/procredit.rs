//! ProCredit Bank exchange rates.
//!
//! The table class carries a build prefix (`pc-rates-table`,
//! `rates-table--v2`, ...), so it is located by a class pattern rather than a
//! fixed selector. Scaled currencies are written as `RUB (100)`.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{by_class_pattern, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static TABLE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rates").expect("table class regex is valid"));

const LAYOUT: ColumnLayout = ColumnLayout::new(0, 1, 2);

pub struct ProcreditProvider {
    url: String,
}

impl ProcreditProvider {
    pub const ID: &'static str = "procredit";
    pub const DEFAULT_URL: &'static str = "https://www.procreditbank.md/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ProcreditProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for ProcreditProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "ProCredit Bank"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let table = by_class_pattern(&document, "table", &TABLE_CLASS)
            .into_iter()
            .next()
            .ok_or_else(|| DataError::MarkupNotFound("table[class~=rates]".to_string()))?;

        Ok(SourceRates::new(rows_to_rates(
            select_all(table, "tbody tr"),
            &LAYOUT,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curs_core::{CurrencyCode, Rate};

    const PAGE: &str = include_str!("../../tests/fixtures/procredit.html");

    #[test]
    fn test_parse_rates_table() {
        let rates = ProcreditProvider::new().parse(PAGE).unwrap().rates;

        assert_eq!(rates.len(), 3);
        assert_eq!(
            rates[&CurrencyCode::parse("usd").unwrap()],
            Rate::Commercial { buy: 16.8, sell: 17.14 }
        );

        let rub = rates[&CurrencyCode::parse("rub").unwrap()];
        assert!((rub.buy() - 0.192).abs() < 1e-12);
        assert!((rub.sell() - 0.228).abs() < 1e-12);

        // sell side is N/A
        assert!(!rates.contains_key(&CurrencyCode::parse("ron").unwrap()));
    }

    #[test]
    fn test_no_matching_table() {
        let html = "<table class=\"deposits\"><tr><td>EUR</td></tr></table>";
        assert!(matches!(
            ProcreditProvider::new().parse(html),
            Err(DataError::MarkupNotFound(_))
        ));
    }
}
