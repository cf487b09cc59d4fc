// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::movie::{MovieDetail, SearchPage};
use crate::domain::search::Generation;
use crate::infrastructure::ApiError;
use crate::ui::notifications;
use crate::ui::search_panel;
use crate::ui::translation_modal;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchPanel(search_panel::Message),
    Modal(translation_modal::Message),
    Notification(notifications::NotificationMessage),
    /// A search request finished.
    SearchCompleted {
        generation: Generation,
        result: Result<SearchPage, ApiError>,
    },
    /// A card poster finished downloading.
    PosterLoaded {
        generation: Generation,
        movie_id: u64,
        result: Result<Vec<u8>, ApiError>,
    },
    /// The modal's detail request finished.
    DetailLoaded {
        generation: Generation,
        result: Result<MovieDetail, ApiError>,
    },
    Tick(Instant), // Periodic tick for toast auto-dismiss
    EscapePressed,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional UI locale override in BCP-47 form (e.g. `pt-BR`).
    pub lang: Option<String>,
    /// API key taking precedence over `TMDB_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MOVIE_TRANSLATOR_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Title searched right after startup.
    pub query: Option<String>,
}
