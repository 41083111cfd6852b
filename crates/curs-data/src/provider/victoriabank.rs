//! Victoriabank exchange rates.
//!
//! The page carries several unlabelled `table.table` elements; the rate
//! table is the one whose header row has buy/sell columns. Currencies are
//! printed by full Romanian name (`Dolar SUA`, `Rubla rusească`).

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{cell_texts, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use scraper::{Html, Selector};

const LABEL_HEADERS: &[&str] = &["denumire", "valuta", "moneda"];
const BUY_HEADERS: &[&str] = &["cumparare", "cumpara"];
const SELL_HEADERS: &[&str] = &["vanzare", "vinde"];

pub struct VictoriabankProvider {
    url: String,
}

impl VictoriabankProvider {
    pub const ID: &'static str = "victoriabank";
    pub const DEFAULT_URL: &'static str = "https://www.victoriabank.md/ro/currency-history";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for VictoriabankProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for VictoriabankProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Victoriabank"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let tables = Selector::parse("table")
            .map_err(|_| DataError::MarkupNotFound("table".to_string()))?;

        for table in document.select(&tables) {
            let rows = select_all(table, "tr");
            let Some(header) = rows.first() else {
                continue;
            };
            let headers = cell_texts(*header);
            if let Some(layout) =
                ColumnLayout::from_headers(&headers, LABEL_HEADERS, BUY_HEADERS, SELL_HEADERS)
            {
                return Ok(SourceRates::new(rows_to_rates(rows, &layout)));
            }
        }

        Err(DataError::MarkupNotFound(
            "table with buy/sell headers".to_string(),
        ))
    }
}
