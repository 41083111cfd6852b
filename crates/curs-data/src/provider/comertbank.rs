//! Comerțbank exchange rates.
//!
//! A plain list in the sidebar, one currency per item: `USD 16,81 / 17,12`.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{commercial_entry, first_match, select_all, text_of};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{RateTable, SourceKind};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

const LIST_SELECTORS: &[&str] = &["ul.curs-list", ".curs ul"];

/// `<label> <buy> / <sell>`
static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\S+)\s*/\s*(\S+)\s*$").expect("list item regex is valid")
});

pub struct ComertbankProvider {
    url: String,
}

impl ComertbankProvider {
    pub const ID: &'static str = "comertbank";
    pub const DEFAULT_URL: &'static str = "https://www.comertbank.md/ro/";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ComertbankProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_item(text: &str, rates: &mut RateTable) {
    let Some(caps) = ITEM.captures(text) else {
        return;
    };
    if let Some((code, rate)) = commercial_entry(&caps[1], &caps[2], &caps[3], None) {
        rates.entry(code).or_insert(rate);
    }
}

#[async_trait]
impl RateProvider for ComertbankProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Comerțbank"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let list = first_match(&document, LIST_SELECTORS)
            .ok_or_else(|| DataError::MarkupNotFound(LIST_SELECTORS.join(", ")))?;

        let mut rates = RateTable::new();
        for item in select_all(list, "li") {
            parse_item(&text_of(item), &mut rates);
        }

        Ok(SourceRates::new(rates))
    }
}
