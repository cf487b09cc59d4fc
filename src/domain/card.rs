// SPDX-License-Identifier: MPL-2.0
//! Mapping of search results into card view models.
//!
//! Cards are rebuilt from scratch on every search; nothing here keeps state
//! between responses.

use super::movie::{score_percent, MovieSummary, SearchPage};
use chrono::{Datelike, NaiveDate};

/// Default maximum overview length on a card, in characters.
pub const DEFAULT_OVERVIEW_LIMIT: usize = 170;

/// Suffix appended to a shortened overview.
pub const ELLIPSIS: &str = "...";

/// Where a card's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterSource {
    /// Image path on the movie database's image server.
    Remote(String),
    /// The bundled "no image available" asset.
    Placeholder,
}

impl PosterSource {
    /// Picks the poster, else the backdrop, else the placeholder.
    /// Blank paths count as missing.
    #[must_use]
    pub fn choose(poster_path: Option<&str>, backdrop_path: Option<&str>) -> Self {
        poster_path
            .filter(|p| !p.trim().is_empty())
            .or_else(|| backdrop_path.filter(|p| !p.trim().is_empty()))
            .map_or(PosterSource::Placeholder, |p| {
                PosterSource::Remote(p.to_string())
            })
    }

    #[must_use]
    pub fn remote_path(&self) -> Option<&str> {
        match self {
            PosterSource::Remote(path) => Some(path),
            PosterSource::Placeholder => None,
        }
    }
}

/// Overview text as displayed on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overview {
    Text(String),
    /// The movie has no overview in the searched language.
    Missing,
}

impl Overview {
    /// Returns the i18n key of the placeholder shown for [`Overview::Missing`].
    pub const MISSING_KEY: &'static str = "card-no-overview";
}

/// Shortens an overview for display.
///
/// Text of at most `limit` characters is returned unchanged. Longer text is
/// cut at the last whitespace within the first `limit + 1` characters (so the
/// kept prefix never exceeds `limit`), trailing whitespace is dropped and
/// [`ELLIPSIS`] is appended. Without any usable whitespace the text is cut
/// at exactly `limit` characters.
#[must_use]
pub fn truncate_overview(overview: &str, limit: usize) -> Overview {
    if overview.trim().is_empty() {
        return Overview::Missing;
    }

    let Some((cut, next)) = overview.char_indices().nth(limit) else {
        return Overview::Text(overview.to_string());
    };

    let window = &overview[..cut + next.len_utf8()];
    let head = window
        .rfind(char::is_whitespace)
        .map(|boundary| window[..boundary].trim_end())
        .filter(|head| !head.is_empty())
        .unwrap_or(&overview[..cut]);

    Overview::Text(format!("{head}{ELLIPSIS}"))
}

/// Everything the result list needs to render one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub poster: PosterSource,
    pub overview: Overview,
    pub release_year: Option<i32>,
    pub original_language: String,
    pub score: Option<u32>,
}

impl MovieCard {
    #[must_use]
    pub fn from_summary(summary: &MovieSummary, overview_limit: usize) -> Self {
        Self {
            id: summary.id,
            title: summary.title.clone(),
            original_title: summary.original_title.clone(),
            poster: PosterSource::choose(
                summary.poster_path.as_deref(),
                summary.backdrop_path.as_deref(),
            ),
            overview: truncate_overview(&summary.overview, overview_limit),
            release_year: release_year(&summary.release_date),
            original_language: summary.original_language.clone(),
            score: score_percent(summary.vote_average),
        }
    }
}

/// Maps a search page into cards, preserving the API order.
#[must_use]
pub fn cards_from_page(page: &SearchPage, overview_limit: usize) -> Vec<MovieCard> {
    page.results
        .iter()
        .map(|summary| MovieCard::from_summary(summary, overview_limit))
        .collect()
}

/// Extracts the year of a `YYYY-MM-DD` release date.
#[must_use]
pub fn release_year(release_date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}
