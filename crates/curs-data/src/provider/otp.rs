//! OTP Bank exchange rates.
//!
//! `#exchange-rates` holds one table per channel (`data-type="cash"` and
//! `data-type="card"`); cash rates are collected. Labels use pair notation
//! (`EUR/MDL`).

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{first_match, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use scraper::Html;

const TABLE_SELECTORS: &[&str] = &[
    "#exchange-rates table[data-type=\"cash\"]",
    "#exchange-rates table",
];
const LAYOUT: ColumnLayout = ColumnLayout::new(0, 1, 2);

pub struct OtpProvider {
    url: String,
}

impl OtpProvider {
    pub const ID: &'static str = "otp";
    pub const DEFAULT_URL: &'static str = "https://www.otpbank.md/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for OtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for OtpProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "OTP Bank"
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
            .ok_or_else(|| DataError::MarkupNotFound("#exchange-rates table".to_string()))?;

        Ok(SourceRates::new(rows_to_rates(select_all(table, "tr"), &LAYOUT)))
    }
}
