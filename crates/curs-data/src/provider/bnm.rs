//! National Bank of Moldova (BNM) official rates.
//!
//! ## Feed
//! `GET /en/official_exchange_rates?get_xml=1&date=dd.mm.yyyy`
//!
//! ```xml
//! <ValCurs Date="02.02.2026" name="...">
//!   <Valute ID="47">
//!     <NumCode>978</NumCode>
//!     <CharCode>EUR</CharCode>
//!     <Nominal>1</Nominal>
//!     <Name>Euro</Name>
//!     <Value>19.9487</Value>
//!   </Valute>
//! </ValCurs>
//! ```
//!
//! `Value` is quoted per `Nominal` units and is normalized to one unit.
//! The leu itself is added as `mdl = 1.0`.

use super::{RateProvider, SourceRates};
use crate::error::{DataError, Result};
use crate::parse::parse_rate;
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{CurrencyCode, Rate, RateTable, SourceKind};
use quick_xml::events::Event;
use quick_xml::Reader;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// BNM official rate feed.
pub struct BnmProvider {
    base_url: String,
}

impl BnmProvider {
    pub const ID: &'static str = "bnm";
    pub const DEFAULT_URL: &'static str = "https://www.bnm.md/en/official_exchange_rates";

    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL)
    }

    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for BnmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for BnmProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Banca Națională a Moldovei"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Official
    }

    fn url(&self, date: NaiveDate) -> String {
        let sep = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}get_xml=1&date={}",
            self.base_url,
            sep,
            date.format(DATE_FORMAT)
        )
    }

    fn parse(&self, body: &str) -> Result<SourceRates> {
        parse_feed(body)
    }
}

/// Fields of one `<Valute>` element.
#[derive(Default)]
struct ValuteFields {
    char_code: String,
    nominal: String,
    value: String,
}

impl ValuteFields {
    fn into_rate(self) -> Option<(CurrencyCode, Rate)> {
        let code = CurrencyCode::parse(&self.char_code).ok()?;
        let nominal = parse_rate(&self.nominal)?;
        let value = parse_rate(&self.value)?;
        let rate = Rate::official(value).and_then(|r| r.per_unit(nominal)).ok()?;
        Some((code, rate))
    }
}

/// Parses the `ValCurs` document.
pub fn parse_feed(xml: &str) -> Result<SourceRates> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut rates = RateTable::new();
    let mut published = None;
    let mut saw_root = false;
    let mut current: Option<ValuteFields> = None;
    let mut current_tag = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "ValCurs" => {
                        saw_root = true;
                        published = e
                            .try_get_attribute("Date")
                            .ok()
                            .flatten()
                            .and_then(|attr| attr.unescape_value().ok().map(|v| v.to_string()))
                            .and_then(|v| NaiveDate::parse_from_str(v.trim(), DATE_FORMAT).ok());
                    }
                    "Valute" => current = Some(ValuteFields::default()),
                    _ => current_tag = name,
                }
            }
            Event::Text(e) => {
                if let Some(fields) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| DataError::Xml(err.to_string()))?
                        .to_string();
                    match current_tag.as_str() {
                        "CharCode" => fields.char_code = text,
                        "Nominal" => fields.nominal = text,
                        "Value" => fields.value = text,
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"Valute" {
                    if let Some(fields) = current.take() {
                        let code = fields.char_code.clone();
                        match fields.into_rate() {
                            Some((code, rate)) => {
                                rates.entry(code).or_insert(rate);
                            }
                            None => tracing::debug!(char_code = %code, "malformed Valute skipped"),
                        }
                    }
                }
                current_tag.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(DataError::MarkupNotFound("ValCurs".to_string()));
    }

    if !rates.is_empty() {
        rates.insert(CurrencyCode::mdl(), Rate::Official(1.0));
    }

    Ok(SourceRates { rates, published })
}
