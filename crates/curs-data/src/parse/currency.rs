//! Currency label resolution.
//!
//! Maps the labels banks print next to their quotes onto canonical codes:
//! `EUR`, `eur`, `EUR/MDL`, `100 RUB`, `RUB (100)`, `UAH x10`, `Dolar SUA`,
//! `Доллар США`, `Leu românesc`, ...

use super::fold;
use curs_core::CurrencyCode;
use regex::Regex;
use std::sync::LazyLock;

/// Codes recognized inside free-form labels.
const KNOWN_CODES: &[&str] = &[
    "usd", "eur", "rub", "ron", "uah", "gbp", "chf", "try", "cad", "aud", "jpy", "cny", "czk",
    "pln", "sek", "nok", "dkk", "huf", "bgn", "ils", "kzt", "byn", "gel", "amd", "azn", "aed",
    "xau", "xag", "mdl",
];

/// Name fragments (diacritics folded, lowercase) per code. Longer, more
/// specific fragments come first within the table.
const NAMES: &[(&str, &[&str])] = &[
    ("cad", &["dolar canadian", "canadian dollar", "канадский доллар"]),
    ("aud", &["dolar australian", "australian dollar", "австралийский доллар"]),
    (
        "usd",
        &[
            "dolar sua",
            "dolarul sua",
            "dolar american",
            "us dollar",
            "u.s. dollar",
            "american dollar",
            "доллар сша",
            "долл. сша",
        ],
    ),
    ("eur", &["euro", "евро"]),
    (
        "rub",
        &[
            "rubla ruseasca",
            "rubla rusa",
            "russian ruble",
            "russian rouble",
            "российский рубль",
            "рубль",
        ],
    ),
    (
        "ron",
        &["leu romanesc", "leu roman", "romanian leu", "румынский лей"],
    ),
    (
        "uah",
        &["hryvna", "hryvnia", "grivna", "grivne", "гривна", "гривня"],
    ),
    (
        "gbp",
        &["lira sterlina", "pound sterling", "british pound", "фунт стерлингов"],
    ),
    (
        "chf",
        &["franc elvetian", "swiss franc", "швейцарский франк"],
    ),
    ("try", &["lira turceasca", "turkish lira", "турецкая лира"]),
    ("jpy", &["yen japonez", "japanese yen", "японская иена", "йена"]),
];

static CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([a-z]{3})\b").expect("code regex is valid"));

/// `100 RUB`: a count directly before a three-letter code
static NOMINAL_BEFORE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s(])(\d{1,6})\s*([a-z]{3})\b").expect("prefix nominal regex is valid")
});

/// `RUB (100)` or `UAH x10`
static NOMINAL_MARKED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(\d{1,6})\s*\)|(?:^|\s)x\s*(\d{1,6})\b")
        .expect("marked nominal regex is valid")
});

/// A resolved label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub code: CurrencyCode,
    /// Units the quote refers to (1 unless the label says otherwise)
    pub nominal: f64,
}

/// Resolves a printed currency label to a code and nominal.
///
/// A non-MDL code always wins over MDL (`EUR/MDL` -> eur).
pub fn resolve_label(text: &str) -> Option<Label> {
    let code = code_from_tokens(text).or_else(|| code_from_name(text))?;
    let nominal = nominal_from(text, &code);
    Some(Label { code, nominal })
}

/// Resolves only the code, ignoring any nominal in the label.
pub fn resolve_code(text: &str) -> Option<CurrencyCode> {
    code_from_tokens(text).or_else(|| code_from_name(text))
}

fn code_from_tokens(text: &str) -> Option<CurrencyCode> {
    let mut fallback = None;
    for cap in CODE_TOKEN.captures_iter(text) {
        let token = cap[1].to_ascii_lowercase();
        if !KNOWN_CODES.contains(&token.as_str()) {
            continue;
        }
        let code = CurrencyCode::parse(&token).ok()?;
        if code.is_mdl() {
            fallback = Some(code);
        } else {
            return Some(code);
        }
    }
    fallback
}

fn code_from_name(text: &str) -> Option<CurrencyCode> {
    let folded = fold(text);
    NAMES
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| folded.contains(f)))
        .and_then(|(code, _)| CurrencyCode::parse(code).ok())
}

fn nominal_from(text: &str, code: &CurrencyCode) -> f64 {
    let before_code = NOMINAL_BEFORE_CODE
        .captures_iter(text)
        .find(|cap| cap[2].eq_ignore_ascii_case(code.as_str()))
        .map(|cap| cap[1].to_string());
    let marked = || {
        NOMINAL_MARKED
            .captures(text)
            .and_then(|cap| cap.get(1).or_else(|| cap.get(2)))
            .map(|m| m.as_str().to_string())
    };

    before_code
        .or_else(marked)
        .and_then(|digits| digits.parse::<f64>().ok())
        .filter(|n| *n > 0.0)
        .unwrap_or(1.0)
}
