//! Eximbank exchange rates.
//!
//! `table.table-rates` mixes the official rate in with the bank's own
//! quotes and the column order has changed before, so columns are located
//! from the header text.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{cell_texts, first_match, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use scraper::Html;

const TABLE_SELECTORS: &[&str] = &["table.table-rates", "table.rates"];

pub struct EximbankProvider {
    url: String,
}

impl EximbankProvider {
    pub const ID: &'static str = "eximbank";
    pub const DEFAULT_URL: &'static str = "https://www.eximbank.md/ro/rates";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EximbankProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for EximbankProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Eximbank"
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

        let headers = select_all(table, "thead tr")
            .into_iter()
            .next()
            .map(cell_texts)
            .unwrap_or_default();
        let layout =
            ColumnLayout::from_headers(&headers, &["cod"], &["cumparare"], &["vanzare"])
                .ok_or_else(|| DataError::MarkupNotFound("rate table headers".to_string()))?;

        Ok(SourceRates::new(rows_to_rates(
            select_all(table, "tbody tr"),
            &layout,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curs_core::{CurrencyCode, Rate};

    const PAGE: &str = include_str!("../../tests/fixtures/eximbank.html");

    #[test]
    fn test_columns_from_headers() {
        let rates = EximbankProvider::new().parse(PAGE).unwrap().rates;

        assert_eq!(rates.len(), 3);
        // bank quote, not the official column
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.75, sell: 20.1 }
        );
        assert!(rates.contains_key(&CurrencyCode::parse("chf").unwrap()));
        assert!(!rates.contains_key(&CurrencyCode::parse("try").unwrap()));
    }

    #[test]
    fn test_missing_headers() {
        let html = r#"<table class="table-rates"><tbody>
            <tr><td>EUR</td><td>19</td><td>20</td></tr>
        </tbody></table>"#;
        assert!(matches!(
            EximbankProvider::new().parse(html),
            Err(DataError::MarkupNotFound(_))
        ));
    }
}
