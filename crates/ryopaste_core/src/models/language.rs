//! Language catalog for the selector and highlighter tags.
//!
//! The catalog is embedded at compile time and parsed once at first use.
//! `codes[0]` of each entry is the canonical tag written to the store and
//! handed to the highlighter.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// One selectable language with its accepted tag spellings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LanguageOption {
    pub name: String,
    pub codes: Vec<String>,
}

impl LanguageOption {
    /// The canonical tag stored alongside a paste.
    pub fn canonical_code(&self) -> &str {
        &self.codes[0]
    }
}

static CATALOG: Lazy<Vec<LanguageOption>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../languages.json"))
        .expect("embedded language catalog must parse")
});

/// The full language catalog, in display order.
pub fn catalog() -> &'static [LanguageOption] {
    &CATALOG
}

/// The default selection for a fresh editor (first catalog entry).
pub fn default_language() -> &'static LanguageOption {
    &CATALOG[0]
}

#[cfg(test)]
mod tests {
    use super::{catalog, default_language};

    #[test]
    fn catalog_parses_and_is_nonempty() {
        assert!(!catalog().is_empty());
        for option in catalog() {
            assert!(!option.name.is_empty());
            assert!(
                !option.codes.is_empty(),
                "entry {} has no codes",
                option.name
            );
        }
    }

    #[test]
    fn default_language_is_first_entry() {
        assert_eq!(default_language(), &catalog()[0]);
    }

    #[test]
    fn python_canonical_code_is_python() {
        let python = catalog()
            .iter()
            .find(|option| option.name == "Python")
            .expect("python entry");
        assert_eq!(python.canonical_code(), "python");
    }
}
