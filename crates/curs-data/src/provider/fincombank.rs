//! FinComBank exchange rates.
//!
//! Quotes live in data attributes of the list items:
//! `<li data-currency="RUB" data-nominal="100" data-buy=".." data-sell="..">`.
//! The visible text is decorative and ignored.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::commercial_entry;
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{RateTable, SourceKind};
use scraper::{Html, Selector};

pub struct FincombankProvider {
    url: String,
}

impl FincombankProvider {
    pub const ID: &'static str = "fincombank";
    pub const DEFAULT_URL: &'static str = "https://www.fincombank.com/ro/curs-valutar";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for FincombankProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for FincombankProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "FinComBank"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Commercial
    }

    fn url(&self, _date: NaiveDate) -> String {
        self.url.clone()
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        let document = Html::parse_document(body);
        let selector = Selector::parse("[data-currency]")
            .map_err(|_| DataError::MarkupNotFound("[data-currency]".to_string()))?;

        let mut rates = RateTable::new();
        for item in document.select(&selector) {
            let attrs = item.value();
            let (Some(label), Some(buy), Some(sell)) = (
                attrs.attr("data-currency"),
                attrs.attr("data-buy"),
                attrs.attr("data-sell"),
            ) else {
                continue;
            };

            if let Some((code, rate)) =
                commercial_entry(label, buy, sell, attrs.attr("data-nominal"))
            {
                rates.entry(code).or_insert(rate);
            }
        }

        Ok(SourceRates::new(rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curs_core::{CurrencyCode, Rate};

    const PAGE: &str = include_str!("../../tests/fixtures/fincombank.html");

    #[test]
    fn test_parse_data_attributes() {
        let rates = FincombankProvider::new().parse(PAGE).unwrap().rates;

        assert_eq!(rates.len(), 3);
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.7, sell: 20.15 }
        );

        let rub = rates[&CurrencyCode::parse("rub").unwrap()];
        assert!((rub.buy() - 0.19).abs() < 1e-12);
        assert!((rub.sell() - 0.225).abs() < 1e-12);

        assert!(!rates.contains_key(&CurrencyCode::parse("uah").unwrap()));
    }

    #[test]
    fn test_first_item_wins() {
        let html = r#"<ul>
            <li data-currency="EUR" data-buy="19.70" data-sell="20.15"></li>
            <li data-currency="EUR" data-buy="19.50" data-sell="20.40"></li>
        </ul>"#;
        let rates = FincombankProvider::new().parse(html).unwrap().rates;
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.7, sell: 20.15 }
        );
    }
}
