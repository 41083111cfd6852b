//! curs.md aggregator: average commercial rates across Moldovan banks.
//!
//! The page carries several tables (per-bank comparison first); only the
//! averages table is read. Its id has been stable, its class less so, so a
//! class pattern is the fallback.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{by_class_pattern, first_match, rows_to_rates, select_all, ColumnLayout};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::SourceKind;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static AVERAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)average").expect("average class regex is valid"));

const LAYOUT: ColumnLayout = ColumnLayout::new(0, 1, 2);

pub struct CursMdProvider {
    url: String,
}

impl CursMdProvider {
    pub const ID: &'static str = "cursmd";
    pub const DEFAULT_URL: &'static str = "https://www.curs.md/ro";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for CursMdProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for CursMdProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "curs.md"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let table = first_match(&document, &["table#table-average"])
            .or_else(|| {
                by_class_pattern(&document, "table", &AVERAGE_CLASS)
                    .into_iter()
                    .next()
            })
            .ok_or_else(|| DataError::MarkupNotFound("#table-average".to_string()))?;

        Ok(SourceRates::new(rows_to_rates(select_all(table, "tr"), &LAYOUT)))
    }
}
