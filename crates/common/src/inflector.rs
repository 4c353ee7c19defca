//! Default [`Naming`] implementation.

use convert_case::{Case, Casing};

use crate::Naming;
use crate::ident::{TS_RESERVED_WORDS, is_valid_ts_identifier, quote_property_key};

/// Plurals that the suffix rules below would get wrong.
const IRREGULAR_SINGULARS: [(&str, &str); 8] = [
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("geese", "goose"),
];

/// English naming rules for collection and field names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inflector;

impl Inflector {
    /// Create the default inflector.
    pub const fn new() -> Self {
        Self
    }
}

/// Replace every run of separator-like characters with a single space and
/// drop leading and trailing separators, so word splitting only has to deal
/// with inner spaces and case boundaries.
fn words_only(s: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Naming for Inflector {
    fn to_pascal_case(&self, s: &str) -> String {
        words_only(s).to_case(Case::UpperCamel)
    }

    fn to_lower_camel_case(&self, s: &str) -> String {
        words_only(s).to_case(Case::Camel)
    }

    fn to_singular(&self, s: &str) -> String {
        if s.is_empty() {
            return String::new();
        }

        // ASCII lowercasing keeps byte offsets aligned with `s`.
        let lower = s.to_ascii_lowercase();

        if let Some((_, singular)) = IRREGULAR_SINGULARS
            .iter()
            .find(|(plural, _)| *plural == lower)
        {
            return (*singular).to_string();
        }

        if lower.len() > 3 && lower.ends_with("ies") {
            return format!("{}y", &s[..s.len() - 3]);
        }

        if ["ses", "shes", "ches", "xes", "zes"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return s[..s.len() - 2].to_string();
        }

        if lower.ends_with('s') && !lower.ends_with("ss") {
            return s[..s.len() - 1].to_string();
        }

        s.to_string()
    }

    fn sanitize_identifier(&self, s: &str) -> String {
        if is_valid_ts_identifier(s) && !TS_RESERVED_WORDS.contains(s) {
            s.to_string()
        } else {
            quote_property_key(s)
        }
    }
}
