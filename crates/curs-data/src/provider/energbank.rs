//! Energbank exchange rates.
//!
//! `table.exchange` with `Valuta | Nominal | Cumpărare | Vânzare`; quotes
//! use comma decimals and are per the nominal column.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{first_match, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use scraper::Html;

const TABLE_SELECTORS: &[&str] = &["table.exchange", ".exchange-rates table"];
const LAYOUT: ColumnLayout = ColumnLayout::new(0, 2, 3).with_nominal(1);

pub struct EnergbankProvider {
    url: String,
}

impl EnergbankProvider {
    pub const ID: &'static str = "energbank";
    pub const DEFAULT_URL: &'static str = "https://www.energbank.com/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EnergbankProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for EnergbankProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Energbank"
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

        Ok(SourceRates::new(rows_to_rates(select_all(table, "tr"), &LAYOUT)))
    }
}
