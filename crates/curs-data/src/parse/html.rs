//! HTML location and row extraction helpers on top of `scraper`.

use super::{currency::resolve_label, fold, number::parse_rate};
use curs_core::{CurrencyCode, Rate, RateTable};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Returns the first element matched by the first selector that matches.
///
/// Selectors are tried in order so a provider can list its current markup
/// first and older layouts after it.
pub fn first_match<'a>(document: &'a Html, selectors: &[&str]) -> Option<ElementRef<'a>> {
    selectors.iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        document.select(&selector).next()
    })
}

/// All elements under `root` matching `css` (empty on an invalid selector).
pub fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => root.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Elements named `tag` having at least one class that matches `pattern`.
pub fn by_class_pattern<'a>(document: &'a Html, tag: &str, pattern: &Regex) -> Vec<ElementRef<'a>> {
    let Ok(selector) = Selector::parse(tag) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .filter(|el| el.value().classes().any(|class| pattern.is_match(class)))
        .collect()
}

/// Element text with whitespace collapsed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Texts of the `th`/`td` cells of a table row, in document order.
pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(text_of)
        .collect()
}

/// Index of the first header cell containing any alias (case and diacritics insensitive).
pub fn column_index(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = fold(header);
        aliases.iter().any(|alias| header.contains(&fold(alias)))
    })
}

/// Column positions of a label/buy/sell table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub label: usize,
    pub buy: usize,
    pub sell: usize,
    /// Separate nominal column, when the table has one
    pub nominal: Option<usize>,
}

impl ColumnLayout {
    pub const fn new(label: usize, buy: usize, sell: usize) -> Self {
        Self {
            label,
            buy,
            sell,
            nominal: None,
        }
    }

    pub const fn with_nominal(self, column: usize) -> Self {
        Self {
            nominal: Some(column),
            ..self
        }
    }

    /// Locates the columns from a header row.
    pub fn from_headers(
        headers: &[String],
        label: &[&str],
        buy: &[&str],
        sell: &[&str],
    ) -> Option<Self> {
        Some(Self::new(
            column_index(headers, label)?,
            column_index(headers, buy)?,
            column_index(headers, sell)?,
        ))
    }
}

/// Builds a per-unit commercial quote from raw cell texts.
///
/// Returns `None` when the label is unknown, MDL itself, or either side is
/// a placeholder.
pub fn commercial_entry(
    label: &str,
    buy: &str,
    sell: &str,
    nominal: Option<&str>,
) -> Option<(CurrencyCode, Rate)> {
    let resolved = resolve_label(label)?;
    if resolved.code.is_mdl() {
        return None;
    }
    let nominal = match nominal.and_then(parse_rate) {
        Some(n) if n > 0.0 => n,
        _ => resolved.nominal,
    };
    let rate = Rate::commercial(parse_rate(buy)?, parse_rate(sell)?)
        .and_then(|rate| rate.per_unit(nominal))
        .ok()?;
    Some((resolved.code, rate))
}

/// Extracts commercial quotes from table rows; header and malformed rows are skipped.
pub fn rows_to_rates<'a, I>(rows: I, layout: &ColumnLayout) -> RateTable
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let mut rates = RateTable::new();
    for row in rows {
        let cells = cell_texts(row);
        let cell = |i: usize| cells.get(i).map(String::as_str);

        let (Some(label), Some(buy), Some(sell)) =
            (cell(layout.label), cell(layout.buy), cell(layout.sell))
        else {
            continue;
        };
        let nominal = layout.nominal.and_then(cell);

        match commercial_entry(label, buy, sell, nominal) {
            Some((code, rate)) => {
                rates.entry(code).or_insert(rate);
            }
            None => tracing::trace!(label, buy, sell, "row skipped"),
        }
    }
    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        <html><body>
        <div class="rates-box rates-box--main">
          <table id="t">
            <tr><th>Valuta</th><th>Cumpărare</th><th>Vânzare</th></tr>
            <tr><td> EUR </td><td>19,70</td><td>20,10</td></tr>
            <tr><td>USD</td><td>16.95</td><td>17.30</td></tr>
            <tr><td>100 RUB</td><td>18.50</td><td>21.00</td></tr>
            <tr><td>GBP</td><td>-</td><td>23.40</td></tr>
            <tr><td>Aur</td><td>1</td><td>2</td></tr>
          </table>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_first_match_falls_back() {
        let doc = Html::parse_document(TABLE);
        assert!(first_match(&doc, &["table.missing", "#t"]).is_some());
        assert!(first_match(&doc, &["table.missing", "%%bad"]).is_none());
    }

    #[test]
    fn test_by_class_pattern() {
        let doc = Html::parse_document(TABLE);
        let re = Regex::new(r"^rates-box--").unwrap();
        assert_eq!(by_class_pattern(&doc, "div", &re).len(), 1);
        let re = Regex::new(r"^nothing").unwrap();
        assert!(by_class_pattern(&doc, "div", &re).is_empty());
    }

    #[test]
    fn test_layout_from_headers_and_rows() {
        let doc = Html::parse_document(TABLE);
        let table = first_match(&doc, &["#t"]).unwrap();
        let rows = select_all(table, "tr");
        let headers = cell_texts(rows[0]);

        let layout = ColumnLayout::from_headers(
            &headers,
            &["valuta"],
            &["cumparare"],
            &["vanzare"],
        )
        .unwrap();
        assert_eq!(layout, ColumnLayout::new(0, 1, 2));

        let rates = rows_to_rates(rows, &layout);
        assert_eq!(rates.len(), 3);
        assert_eq!(
            rates[&CurrencyCode::parse("eur").unwrap()],
            Rate::Commercial { buy: 19.7, sell: 20.1 }
        );
        let rub = rates[&CurrencyCode::parse("rub").unwrap()];
        assert!((rub.buy() - 0.185).abs() < 1e-12);
        assert!((rub.sell() - 0.21).abs() < 1e-12);
        assert!(!rates.contains_key(&CurrencyCode::parse("gbp").unwrap()));
    }

    #[test]
    fn test_commercial_entry_nominal_column_wins() {
        let (code, rate) = commercial_entry("UAH", "40,00", "44,00", Some("10")).unwrap();
        assert_eq!(code.as_str(), "uah");
        assert_eq!(rate, Rate::Commercial { buy: 4.0, sell: 4.4 });

        assert!(commercial_entry("MDL", "1", "1", None).is_none());
        assert!(commercial_entry("EUR", "n/a", "20", None).is_none());
    }
}
