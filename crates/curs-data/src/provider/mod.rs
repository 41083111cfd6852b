//! Rate providers.
//!
//! Every provider is an independent GET-then-parse routine for one
//! publisher's markup. Providers share nothing but the [`RateProvider`]
//! contract and the `parse` toolkit.
//!
//! ## Official
//! - `BnmProvider`: National Bank of Moldova XML feed
//!
//! ## Commercial banks (HTML)
//! - `MaibProvider`, `MicbProvider`, `VictoriabankProvider`, `OtpProvider`,
//!   `EximbankProvider`, `FincombankProvider`, `EnergbankProvider`,
//!   `ProcreditProvider`, `ComertbankProvider`, `EcbProvider`
//!
//! ## Aggregator (HTML)
//! - `CursMdProvider`: curs.md average commercial rates

pub mod bnm;
pub mod comertbank;
pub mod cursmd;
pub mod ecb;
pub mod energbank;
pub mod eximbank;
pub mod fincombank;
pub mod maib;
pub mod micb;
pub mod otp;
pub mod procredit;
pub mod victoriabank;

pub use bnm::BnmProvider;
pub use comertbank::ComertbankProvider;
pub use cursmd::CursMdProvider;
pub use ecb::EcbProvider;
pub use energbank::EnergbankProvider;
pub use eximbank::EximbankProvider;
pub use fincombank::FincombankProvider;
pub use maib::MaibProvider;
pub use micb::MicbProvider;
pub use otp::OtpProvider;
pub use procredit::ProcreditProvider;
pub use victoriabank::VictoriabankProvider;

use crate::error::{DataError, Result};
use crate::http::HttpClient;
use async_trait::async_trait;
use chrono::NaiveDate;
use curs_core::{RateTable, SourceKind, SourceReport};

/// Parsed output of one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRates {
    /// Per-unit rates against MDL
    pub rates: RateTable,
    /// Date the publisher states the rates are valid for, if any
    pub published: Option<NaiveDate>,
}

impl SourceRates {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            published: None,
        }
    }
}

/// Rate provider contract.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Stable source id used as the snapshot key.
    fn id(&self) -> &'static str;

    /// Human-readable publisher name.
    fn name(&self) -> &'static str;

    fn kind(&self) -> SourceKind;

    /// Page or feed URL for the given local date.
    fn url(&self, date: NaiveDate) -> String;

    /// Extracts rates from a fetched body.
    fn parse(&self, body: &str) -> Result<SourceRates>;

    /// GETs [`url`](Self::url) and parses it. An empty result is an error.
    async fn fetch(&self, http: &HttpClient, date: NaiveDate) -> Result<SourceRates> {
        let url = self.url(date);
        let body = http.get_text(&url).await?;
        let parsed = self.parse(&body)?;

        if parsed.rates.is_empty() {
            return Err(DataError::NoRates {
                source_id: self.id().to_string(),
            });
        }

        tracing::debug!(source = self.id(), count = parsed.rates.len(), "rates parsed");
        Ok(parsed)
    }

    /// Wraps parsed rates into a snapshot report.
    fn report(&self, rates: RateTable) -> SourceReport {
        SourceReport::new(self.name(), self.kind(), rates)
    }
}
