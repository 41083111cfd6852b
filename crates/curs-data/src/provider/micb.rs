//! Moldindconbank exchange rates.
//!
//! Markup: one card per currency, `div.rate-item.rate-item--{code}` with
//! `.code`, `.buy` and `.sell` children. The modifier class changes with
//! the currency, so cards are located by class pattern.

use super::{RateProvider, SourceRates};
use crate::error::Result;
use crate::parse::{by_class_pattern, commercial_entry, select_all, text_of};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{RateTable, SourceKind};
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

static CARD_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rate-item(?:--[a-z]+)?$").expect("card regex is valid"));

pub struct MicbProvider {
    url: String,
}

impl MicbProvider {
    pub const ID: &'static str = "micb";
    pub const DEFAULT_URL: &'static str = "https://www.micb.md/ro/curs-valutar/";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for MicbProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for MicbProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Moldindconbank"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let mut rates = RateTable::new();

        for card in by_class_pattern(&document, "div", &CARD_CLASS) {
            let (Some(code), Some(buy), Some(sell)) =
                (child_text(card, ".code"), child_text(card, ".buy"), child_text(card, ".sell"))
            else {
                continue;
            };
            if let Some((code, rate)) = commercial_entry(&code, &buy, &sell, None) {
                rates.entry(code).or_insert(rate);
            }
        }

        Ok(SourceRates::new(rates))
    }
}

fn child_text(card: ElementRef<'_>, css: &str) -> Option<String> {
    select_all(card, css).into_iter().next().map(text_of)
}
