//! Currency code type.

use crate::error::{CursError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical currency code: exactly three lowercase ASCII letters.
///
/// Orders lexicographically so rate maps serialize deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a code (`" EUR "` -> `eur`).
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(CursError::InvalidCurrencyCode(s.to_string()))
        }
    }

    /// Moldovan leu, the base currency of every published rate.
    pub fn mdl() -> Self {
        Self("mdl".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_mdl(&self) -> bool {
        self.0 == "mdl"
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CursError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CursError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(CurrencyCode::parse("EUR").unwrap().as_str(), "eur");
        assert_eq!(CurrencyCode::parse(" usd\n").unwrap().as_str(), "usd");
        assert!(CurrencyCode::parse("mdl").unwrap().is_mdl());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(CurrencyCode::parse("").is_err());
        assert!(CurrencyCode::parse("EU").is_err());
        assert!(CurrencyCode::parse("EURO").is_err());
        assert!(CurrencyCode::parse("U5D").is_err());
        assert!(CurrencyCode::parse("ЕВР").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let code: CurrencyCode = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(code.as_str(), "gbp");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"gbp\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"pounds\"").is_err());
    }

    #[test]
    fn test_ordering() {
        let mut codes = vec![
            CurrencyCode::parse("usd").unwrap(),
            CurrencyCode::parse("eur").unwrap(),
            CurrencyCode::mdl(),
        ];
        codes.sort();
        let names: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["eur", "mdl", "usd"]);
    }
}
