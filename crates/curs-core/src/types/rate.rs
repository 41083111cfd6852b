//! Exchange rate values.
//!
//! Every rate is quoted in MDL per one unit of the foreign currency.
//! Sources publishing per-100 (or other nominal) quotes are normalized with
//! [`Rate::per_unit`] before they reach a snapshot.

use crate::error::{CursError, Result};
use crate::types::{CurrencyCode, SourceKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Rates of one source keyed by currency.
pub type RateTable = BTreeMap<CurrencyCode, Rate>;

/// A single currency quote.
///
/// Serialized untagged: an official rate is a bare number, a commercial
/// quote is a `{"buy": .., "sell": ..}` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rate {
    /// Official reference rate
    Official(f64),
    /// Commercial bank purchase/sale prices
    Commercial { buy: f64, sell: f64 },
}

impl Rate {
    /// Creates an official rate.
    pub fn official(value: f64) -> Result<Self> {
        Ok(Self::Official(check_value(value)?))
    }

    /// Creates a commercial buy/sell quote.
    pub fn commercial(buy: f64, sell: f64) -> Result<Self> {
        Ok(Self::Commercial {
            buy: check_value(buy)?,
            sell: check_value(sell)?,
        })
    }

    /// Normalizes a quote published per `nominal` units to a per-unit quote.
    pub fn per_unit(self, nominal: f64) -> Result<Self> {
        if !nominal.is_finite() || nominal <= 0.0 {
            return Err(CursError::InvalidNominal(nominal));
        }
        match self {
            Self::Official(v) => Self::official(v / nominal),
            Self::Commercial { buy, sell } => Self::commercial(buy / nominal, sell / nominal),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Official(_) => SourceKind::Official,
            Self::Commercial { .. } => SourceKind::Commercial,
        }
    }

    /// Price the publisher pays for the currency (official rate for official quotes).
    pub fn buy(&self) -> f64 {
        match self {
            Self::Official(v) => *v,
            Self::Commercial { buy, .. } => *buy,
        }
    }

    /// Price the publisher charges for the currency (official rate for official quotes).
    pub fn sell(&self) -> f64 {
        match self {
            Self::Official(v) => *v,
            Self::Commercial { sell, .. } => *sell,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRate {
    Official(f64),
    Commercial { buy: f64, sell: f64 },
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rate = match RawRate::deserialize(deserializer)? {
            RawRate::Official(v) => Rate::official(v),
            RawRate::Commercial { buy, sell } => Rate::commercial(buy, sell),
        };
        rate.map_err(serde::de::Error::custom)
    }
}

fn check_value(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CursError::InvalidRate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(Rate::official(-1.0).is_err());
        assert!(Rate::official(f64::NAN).is_err());
        assert!(Rate::commercial(17.5, f64::INFINITY).is_err());
        assert!(Rate::commercial(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_per_unit() {
        let rate = Rate::official(21.5).unwrap().per_unit(100.0).unwrap();
        assert!((rate.buy() - 0.215).abs() < 1e-12);

        let rate = Rate::commercial(40.0, 44.0).unwrap().per_unit(10.0).unwrap();
        assert_eq!(rate, Rate::Commercial { buy: 4.0, sell: 4.4 });

        assert!(Rate::official(1.0).unwrap().per_unit(0.0).is_err());
    }

    #[test]
    fn test_serialize_untagged() {
        let official = serde_json::to_string(&Rate::official(19.95).unwrap()).unwrap();
        assert_eq!(official, "19.95");

        let commercial = serde_json::to_value(Rate::commercial(17.5, 17.8).unwrap()).unwrap();
        assert_eq!(commercial, serde_json::json!({"buy": 17.5, "sell": 17.8}));
    }

    #[test]
    fn test_deserialize_validates() {
        let rate: Rate = serde_json::from_str(r#"{"buy": 1.5, "sell": 1.6}"#).unwrap();
        assert_eq!(rate.kind(), SourceKind::Commercial);
        let rate: Rate = serde_json::from_str("20").unwrap();
        assert_eq!(rate, Rate::Official(20.0));
        assert!(serde_json::from_str::<Rate>("-3.0").is_err());
    }
}
