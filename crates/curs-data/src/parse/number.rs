//! Locale-aware rate number coercion.
//!
//! Bank pages mix `19.45`, `19,45`, `1 234,50`, `1,234.50`, `17.55 MDL`
//! and placeholder cells such as `-` or `n/a`.

/// Cell contents that mean "no quote".
const PLACEHOLDERS: &[&str] = &["", "-", "--", "—", "–", "n/a", "na", "...", "…", "x"];

/// Parses a displayed rate into a non-negative finite float.
///
/// - `"19,4500"` -> 19.45
/// - `"1 234,56"` -> 1234.56
/// - `"1,234.56"` -> 1234.56
/// - `"17.55 MDL"` -> 17.55
/// - `"-"`, `"n/a"`, `"-1.2"` -> None
pub fn parse_rate(text: &str) -> Option<f64> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{a0}' | '\u{2009}' | '\u{202f}' => ' ',
            _ => c,
        })
        .collect();
    let trimmed = normalized.trim();

    if PLACEHOLDERS
        .iter()
        .any(|p| trimmed.eq_ignore_ascii_case(p))
    {
        return None;
    }

    let kept: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    // negative values and ranges are not rates
    if kept.contains('-') || !kept.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    // separators outside the digit span belong to decoration such as `lei.`
    let first = kept.find(|c: char| c.is_ascii_digit())?;
    let last = kept.rfind(|c: char| c.is_ascii_digit())?;
    let canonical = normalize_separators(&kept[first..=last]);
    let value: f64 = canonical.parse().ok()?;

    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Rewrites `kept` so that `.` is the only (decimal) separator.
fn normalize_separators(kept: &str) -> String {
    let last_comma = kept.rfind(',');
    let last_dot = kept.rfind('.');

    match (last_comma, last_dot) {
        (Some(c), Some(d)) => {
            // the right-most separator is the decimal one
            let (decimal, thousands) = if c > d { (',', '.') } else { ('.', ',') };
            kept.chars()
                .filter(|&ch| ch != thousands)
                .map(|ch| if ch == decimal { '.' } else { ch })
                .collect()
        }
        (Some(_), None) => {
            if kept.matches(',').count() == 1 {
                kept.replace(',', ".")
            } else {
                kept.replace(',', "")
            }
        }
        (None, Some(_)) => {
            if kept.matches('.').count() == 1 {
                kept.to_string()
            } else {
                kept.replace('.', "")
            }
        }
        (None, None) => kept.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_plain_and_comma_decimals() {
        approx(parse_rate("19.45"), 19.45);
        approx(parse_rate("19,4500"), 19.45);
        approx(parse_rate(" 17.8 "), 17.8);
        approx(parse_rate("20"), 20.0);
    }

    #[test]
    fn test_thousands_separators() {
        approx(parse_rate("1 234,56"), 1234.56);
        approx(parse_rate("1\u{a0}234,56"), 1234.56);
        approx(parse_rate("1,234.56"), 1234.56);
        approx(parse_rate("1.234,56"), 1234.56);
        approx(parse_rate("1.234.567"), 1_234_567.0);
    }

    #[test]
    fn test_decorations_are_stripped() {
        approx(parse_rate("17.55 MDL"), 17.55);
        approx(parse_rate("19,90 lei"), 19.9);
        approx(parse_rate("\n\t 0.2150\n"), 0.215);
        approx(parse_rate("19,90 lei."), 19.9);
        approx(parse_rate("17.55 MDL."), 17.55);
        approx(parse_rate("MDL. 1.234,50"), 1234.5);
    }

    #[test]
    fn test_placeholders() {
        for cell in ["", "-", "—", "–", "n/a", "N/A", "...", "  ", "lei"] {
            assert_eq!(parse_rate(cell), None, "{cell:?}");
        }
    }

    #[test]
    fn test_negative_and_ranges_rejected() {
        assert_eq!(parse_rate("-1.25"), None);
        assert_eq!(parse_rate("17.5-17.8"), None);
    }
}
