//! EuroCreditBank exchange rates.
//!
//! Rendered as a definition list where each `dt` names a currency and the
//! following `dd.buy` / `dd.sell` hold its quotes.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::{commercial_entry, first_match, text_of};
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{RateTable, SourceKind};
use scraper::{ElementRef, Html};

const LIST_SELECTORS: &[&str] = &["dl.exchange", ".exchange dl"];

pub struct EcbProvider {
    url: String,
}

impl EcbProvider {
    pub const ID: &'static str = "ecb";
    pub const DEFAULT_URL: &'static str = "https://www.ecb.md/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EcbProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// One `dt` and the quotes collected after it.
#[derive(Default)]
struct Entry {
    label: String,
    buy: Option<String>,
    sell: Option<String>,
}

impl Entry {
    fn flush(self, rates: &mut RateTable) {
        let (Some(buy), Some(sell)) = (self.buy, self.sell) else {
            return;
        };
        if let Some((code, rate)) = commercial_entry(&self.label, &buy, &sell, None) {
            rates.entry(code).or_insert(rate);
        }
    }
}

#[async_trait]
impl RateProvider for EcbProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "EuroCreditBank"
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
        let mut current: Option<Entry> = None;

        for node in list.children().filter_map(ElementRef::wrap) {
            let el = node.value();
            match el.name() {
                "dt" => {
                    if let Some(entry) = current.take() {
                        entry.flush(&mut rates);
                    }
                    current = Some(Entry {
                        label: text_of(node),
                        ..Entry::default()
                    });
                }
                "dd" => {
                    let Some(entry) = current.as_mut() else {
                        continue;
                    };
                    if el.classes().any(|class| class == "buy") {
                        entry.buy = Some(text_of(node));
                    } else if el.classes().any(|class| class == "sell") {
                        entry.sell = Some(text_of(node));
                    }
                }
                _ => {}
            }
        }
        if let Some(entry) = current {
            entry.flush(&mut rates);
        }

        Ok(SourceRates::new(rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curs_core::{CurrencyCode, Rate};

    const PAGE: &str = include_str!("../../tests/fixtures/ecb.html");

    #[test]
    fn test_parse_definition_list() {
        let rates = EcbProvider::new().parse(PAGE).unwrap().rates;

        assert_eq!(rates.len(), 3);
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.68, sell: 20.18 }
        );
        assert_eq!(
            rates[&CurrencyCode::parse("uah").unwrap()],
            Rate::Commercial { buy: 0.38, sell: 0.44 }
        );
        assert!(!rates.contains_key(&CurrencyCode::parse("rub").unwrap()));
    }

    #[test]
    fn test_dd_without_dt_is_ignored() {
        let html = r#"<dl class="exchange">
            <dd class="buy">1</dd><dd class="sell">2</dd>
            <dt>USD</dt><dd class="sell">17.1</dd><dd class="buy">16.7</dd>
        </dl>"#;
        let rates = EcbProvider::new().parse(html).unwrap().rates;
        assert_eq!(rates.len(), 1);
        assert_eq!(
            rates[&CurrencyCode::parse("usd").unwrap()],
            Rate::Commercial { buy: 16.7, sell: 17.1 }
        );
    }
}
