// SPDX-License-Identifier: MPL-2.0
//! Languages the movie database can be queried in.
//!
//! The set of selectable languages is data, not code: a [`LanguageTable`] is
//! built once at startup (from the config file, or [`LanguageTable::default`])
//! and handed to the search panel. Labels are shown verbatim in the pickers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code of the default source language.
pub const ENGLISH_US: &str = "en-US";

/// Code of the default destination language.
pub const PORTUGUESE_BR: &str = "pt-BR";

/// One selectable language: the API language code and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub label: String,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Reasons a configured language table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageTableError {
    #[error("at least two languages are required, got {0}")]
    TooFew(usize),
    #[error("duplicate language code: {0}")]
    DuplicateCode(String),
    #[error("language entry with an empty code")]
    EmptyCode,
}

/// Ordered, duplicate-free list of selectable languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<Language>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self {
            entries: vec![
                Language::new(ENGLISH_US, "English"),
                Language::new(PORTUGUESE_BR, "Portuguese (BR)"),
            ],
        }
    }
}

impl LanguageTable {
    /// Builds a table from configured entries.
    ///
    /// A translator needs two distinct languages, so fewer than two entries
    /// is an error, as are blank or repeated codes.
    pub fn new(entries: Vec<Language>) -> Result<Self, LanguageTableError> {
        if entries.len() < 2 {
            return Err(LanguageTableError::TooFew(entries.len()));
        }
        for (index, language) in entries.iter().enumerate() {
            if language.code.trim().is_empty() {
                return Err(LanguageTableError::EmptyCode);
            }
            if entries[..index].iter().any(|l| l.code == language.code) {
                return Err(LanguageTableError::DuplicateCode(language.code.clone()));
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Language] {
        &self.entries
    }

    /// Looks up a language by its code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.entries.iter().find(|l| l.code == code)
    }

    /// Resolves a code against the table, falling back to the entry at
    /// `fallback_index` when the code is unknown.
    #[must_use]
    pub fn resolve(&self, code: Option<&str>, fallback_index: usize) -> Language {
        code.and_then(|c| self.get(c))
            .or_else(|| self.entries.get(fallback_index))
            .unwrap_or(&self.entries[0])
            .clone()
    }

    /// Default pair: the configured codes when known, else the first two entries.
    #[must_use]
    pub fn default_pair(&self, source: Option<&str>, destination: Option<&str>) -> LanguagePair {
        LanguagePair {
            source: self.resolve(source, 0),
            destination: self.resolve(destination, 1),
        }
    }
}

/// The language results are searched in and the language they are
/// translated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub destination: Language,
}

impl LanguagePair {
    pub fn new(source: Language, destination: Language) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Exchanges source and destination.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }

    #[must_use]
    pub fn swapped(mut self) -> Self {
        self.swap();
        self
    }

    #[must_use]
    pub fn is_same_language(&self) -> bool {
        self.source.code == self.destination.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Language {
        Language::new(ENGLISH_US, "English")
    }

    fn portuguese() -> Language {
        Language::new(PORTUGUESE_BR, "Portuguese (BR)")
    }

    #[test]
    fn default_table_has_english_and_brazilian_portuguese() {
        let table = LanguageTable::default();
        let codes: Vec<&str> = table.entries().iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en-US", "pt-BR"]);
        assert_eq!(table.get("pt-BR").map(|l| l.label.as_str()), Some("Portuguese (BR)"));
    }

    #[test]
    fn table_rejects_single_entry() {
        assert_eq!(
            LanguageTable::new(vec![english()]),
            Err(LanguageTableError::TooFew(1))
        );
    }

    #[test]
    fn table_rejects_duplicate_codes() {
        let result = LanguageTable::new(vec![english(), portuguese(), english()]);
        assert_eq!(
            result,
            Err(LanguageTableError::DuplicateCode("en-US".to_string()))
        );
    }

    #[test]
    fn table_rejects_blank_code() {
        let result = LanguageTable::new(vec![english(), Language::new("  ", "Blank")]);
        assert_eq!(result, Err(LanguageTableError::EmptyCode));
    }

    #[test]
    fn default_pair_falls_back_to_first_two_entries() {
        let table = LanguageTable::default();
        let pair = table.default_pair(Some("fr-FR"), None);
        assert_eq!(pair.source, english());
        assert_eq!(pair.destination, portuguese());
    }

    #[test]
    fn default_pair_honours_known_codes() {
        let table = LanguageTable::default();
        let pair = table.default_pair(Some("pt-BR"), Some("en-US"));
        assert_eq!(pair.source, portuguese());
        assert_eq!(pair.destination, english());
    }

    #[test]
    fn swap_exchanges_source_and_destination() {
        let mut pair = LanguagePair::new(english(), portuguese());
        pair.swap();
        assert_eq!(pair.source, portuguese());
        assert_eq!(pair.destination, english());
    }

    #[test]
    fn swapping_twice_restores_original_pair() {
        let table = LanguageTable::default();
        for source in table.entries() {
            for destination in table.entries() {
                let original = LanguagePair::new(source.clone(), destination.clone());
                let twice = original.clone().swapped().swapped();
                assert_eq!(twice, original);
            }
        }
    }

    #[test]
    fn language_displays_its_label() {
        assert_eq!(portuguese().to_string(), "Portuguese (BR)");
    }
}
