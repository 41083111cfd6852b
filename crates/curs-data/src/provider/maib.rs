//! maib exchange rates.
//!
//! Markup: `table.currency-table` with `Valuta | Cumpără | Vinde | BNM`
//! columns; the BNM column is ignored.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{first_match, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use scraper::Html;

const TABLE_SELECTORS: &[&str] = &["table.currency-table", "#rates table"];
const LAYOUT: ColumnLayout = ColumnLayout::new(0, 1, 2);

pub struct MaibProvider {
    url: String,
}

impl MaibProvider {
    pub const ID: &'static str = "maib";
    pub const DEFAULT_URL: &'static str = "https://www.maib.md/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for MaibProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for MaibProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "maib"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let table = first_match(&document, TABLE_SELECTORS)
            .ok_or_else(|| DataError::MarkupNotFound(TABLE_SELECTORS.join(", ")))?;

        Ok(SourceRates::new(rows_to_rates(select_all(table, "tbody tr"), &LAYOUT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curs_core::{CurrencyCode, Rate};

    const PAGE: &str = include_str!("../../tests/fixtures/maib.html");

    #[test]
    fn test_parse_page() {
        let rates = MaibProvider::new().parse(PAGE).unwrap().rates;

        assert_eq!(rates.len(), 4);
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.75, sell: 20.15 }
        );
        assert_eq!(
            rates[&CurrencyCode::parse("rub").unwrap()],
            Rate::Commercial { buy: 0.195, sell: 0.225 }
        );
        // placeholder row
        assert!(!rates.contains_key(&CurrencyCode::parse("uah").unwrap()));
    }

    #[test]
    fn test_missing_table() {
        let result = MaibProvider::new().parse("<html><body><p>Mentenanță</p></body></html>");
        assert!(matches!(result, Err(DataError::MarkupNotFound(_))));
    }
}
