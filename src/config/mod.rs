// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language and theme mode
//! - `[api]` - Movie database key, endpoints and timeout
//! - `[search]` - Default language pair, overview length and the language table
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `MOVIE_TRANSLATOR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use movie_title_translator::config;
//!
//! let (mut config, _warning) = config::load();
//! config.search.default_source = Some("pt-BR".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::language::{Language, LanguageTable};
use crate::error::{Error, Result};
use crate::infrastructure::tmdb::ClientSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Movie database access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// API key, used when neither `--api-key` nor `TMDB_API_KEY` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Search panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchConfig {
    /// Language code selected as source at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,

    /// Language code selected as destination at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<String>,

    /// Maximum overview length on result cards, in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview_limit: Option<usize>,

    /// Selectable languages; empty means the built-in English/Portuguese table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Builds the language table.
    ///
    /// Returns the built-in table plus a warning key when the configured
    /// table is invalid.
    #[must_use]
    pub fn language_table(&self) -> (LanguageTable, Option<String>) {
        if self.search.languages.is_empty() {
            return (LanguageTable::default(), None);
        }
        match LanguageTable::new(self.search.languages.clone()) {
            Ok(table) => (table, None),
            Err(error) => {
                tracing::warn!(%error, "invalid language table in config, using defaults");
                (
                    LanguageTable::default(),
                    Some("notification-config-languages-invalid".to_string()),
                )
            }
        }
    }

    /// Overview limit clamped to the supported range.
    #[must_use]
    pub fn overview_limit(&self) -> usize {
        self.search
            .overview_limit
            .unwrap_or(DEFAULT_OVERVIEW_LIMIT)
            .clamp(MIN_OVERVIEW_LIMIT, MAX_OVERVIEW_LIMIT)
    }

    /// Connection settings for the movie database client.
    #[must_use]
    pub fn client_settings(&self, explicit_api_key: Option<String>) -> ClientSettings {
        let timeout_secs = self
            .api
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);

        ClientSettings {
            explicit_api_key,
            configured_api_key: self.api.api_key.clone(),
            api_base_url: self
                .api
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            image_base_url: self
                .api
                .image_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
