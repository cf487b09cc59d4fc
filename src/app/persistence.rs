// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only the language pair of the last accepted search is written back; the
//! rest of `settings.toml` is user-edited and left untouched.

use crate::config::{self, Config};
use crate::domain::language::LanguagePair;

/// Copies the pair into the config. Returns `false` when nothing changed.
pub fn apply_language_pair(config: &mut Config, languages: &LanguagePair) -> bool {
    let source = Some(languages.source.code.clone());
    let destination = Some(languages.destination.code.clone());
    if config.search.default_source == source && config.search.default_destination == destination
    {
        return false;
    }
    config.search.default_source = source;
    config.search.default_destination = destination;
    true
}

/// Remembers `languages` as the startup pair.
///
/// Returns the i18n key of a warning when the settings could not be written.
/// A settings file that failed to parse is never overwritten. Guarded during
/// tests to keep isolation: unit tests exercise [`apply_language_pair`]
/// directly.
pub fn persist_language_pair(languages: &LanguagePair) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    let (mut cfg, load_warning) = config::load();
    if load_warning.is_some() {
        tracing::debug!("settings unreadable, language pair not saved");
        return None;
    }
    if !apply_language_pair(&mut cfg, languages) {
        return None;
    }

    match config::save(&cfg) {
        Ok(()) => {
            tracing::debug!(
                source = %languages.source.code,
                destination = %languages.destination.code,
                "language pair saved"
            );
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some("notification-config-save-error".to_string())
        }
    }
}
