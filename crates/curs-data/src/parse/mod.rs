//! Extraction toolkit shared by the providers.
//!
//! - `number` - locale-formatted numeric coercion
//! - `currency` - textual label to currency code mapping
//! - `html` - table/container location and row extraction

pub mod currency;
pub mod html;
pub mod number;

pub use currency::{resolve_code, resolve_label, Label};
pub use html::{
    by_class_pattern, cell_texts, column_index, commercial_entry, first_match, rows_to_rates,
    select_all, text_of, ColumnLayout,
};
pub use number::parse_rate;

/// Lowercases, folds Romanian diacritics and collapses whitespace.
pub(crate) fn fold(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'î' => 'i',
            'ș' | 'ş' => 's',
            'ț' | 'ţ' => 't',
            'ё' => 'е',
            _ => c,
        })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
