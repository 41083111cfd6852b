//! Amount conversion over one source's rates.
//!
//! All rates are MDL per unit, so a cross conversion goes through MDL:
//! `amount * rate(from) / rate(to)`. For commercial quotes the client sells
//! `from` to the bank at its buy price and buys `to` at its sell price.

use crate::domain::SourceReport;
use crate::error::{CursError, Result};
use crate::types::CurrencyCode;
use serde::Serialize;

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
    /// Converted amount in `to`
    pub result: f64,
    /// Units of `to` received for one unit of `from`
    pub unit_rate: f64,
}

/// Converts `amount` of `from` into `to` using the rates of `report`.
pub fn convert(
    report: &SourceReport,
    source_id: &str,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<Conversion> {
    if !amount.is_finite() {
        return Err(CursError::InvalidAmount(amount));
    }

    let lookup = |code: &CurrencyCode| {
        report.rate(code).ok_or_else(|| CursError::UnknownCurrency {
            source_id: source_id.to_string(),
            currency: code.to_string(),
        })
    };

    let rate_from = lookup(from)?.buy();
    let rate_to = lookup(to)?.sell();

    if rate_from == 0.0 {
        return Err(CursError::ZeroRate(from.to_string()));
    }
    if rate_to == 0.0 {
        return Err(CursError::ZeroRate(to.to_string()));
    }

    let unit_rate = rate_from / rate_to;
    Ok(Conversion {
        from: from.clone(),
        to: to.clone(),
        amount,
        result: amount * unit_rate,
        unit_rate,
    })
}
