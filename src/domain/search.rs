// SPDX-License-Identifier: MPL-2.0
//! Search input validation and request generations.

use super::language::LanguagePair;
use std::fmt;

/// Input rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Search field cannot be empty")]
    EmptyQuery,
    #[error("Idioms must be different")]
    SameLanguages,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::EmptyQuery => "warning-empty-query",
            ValidationError::SameLanguages => "warning-same-languages",
        }
    }
}

/// A validated search: non-empty text and two distinct languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    languages: LanguagePair,
}

impl SearchQuery {
    /// Validates raw input. The empty-query check runs first.
    pub fn new(text: &str, languages: &LanguagePair) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        if languages.is_same_language() {
            return Err(ValidationError::SameLanguages);
        }
        Ok(Self {
            text: text.to_string(),
            languages: languages.clone(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn source_code(&self) -> &str {
        &self.languages.source.code
    }

    #[must_use]
    pub fn destination_code(&self) -> &str {
        &self.languages.destination.code
    }

    #[must_use]
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }
}

/// Monotonic tag attached to every outbound request.
///
/// A component bumps its generation when it issues a request and only
/// applies responses carrying the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Advances to the next generation and returns it.
    pub fn bump(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    /// Whether a response tagged `other` belongs to this generation.
    #[must_use]
    pub fn is_current(self, other: Generation) -> bool {
        self == other
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{Language, LanguageTable};

    fn pair(source: &str, destination: &str) -> LanguagePair {
        LanguagePair::new(Language::new(source, source), Language::new(destination, destination))
    }

    #[test]
    fn empty_queries_are_rejected() {
        for text in ["", " ", "\t", "  \n  "] {
            assert_eq!(
                SearchQuery::new(text, &pair("en-US", "pt-BR")),
                Err(ValidationError::EmptyQuery),
                "query {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn identical_languages_are_rejected() {
        for language in LanguageTable::default().entries() {
            let same = LanguagePair::new(language.clone(), language.clone());
            assert_eq!(
                SearchQuery::new("the godfather", &same),
                Err(ValidationError::SameLanguages)
            );
        }
    }

    #[test]
    fn empty_query_is_reported_before_same_languages() {
        assert_eq!(
            SearchQuery::new("", &pair("en-US", "en-US")),
            Err(ValidationError::EmptyQuery)
        );
    }

    #[test]
    fn valid_query_is_trimmed() {
        let query = SearchQuery::new("  the godfather ", &pair("en-US", "pt-BR"))
            .expect("query should be valid");
        assert_eq!(query.text(), "the godfather");
        assert_eq!(query.source_code(), "en-US");
        assert_eq!(query.destination_code(), "pt-BR");
    }

    #[test]
    fn validation_messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::EmptyQuery.to_string(),
            "Search field cannot be empty"
        );
        assert_eq!(
            ValidationError::SameLanguages.to_string(),
            "Idioms must be different"
        );
    }

    #[test]
    fn generation_bump_is_monotonic() {
        let mut generation = Generation::default();
        let first = generation.bump();
        let second = generation.bump();
        assert!(second > first);
        assert!(generation.is_current(second));
        assert!(!generation.is_current(first));
    }
}
