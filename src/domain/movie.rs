// SPDX-License-Identifier: MPL-2.0
//! Movie records as returned by the movie database.
//!
//! Every field besides `id` tolerates absence or `null`: the API omits
//! fields freely depending on the requested language.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of `/search/movie` results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A search result entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// A genre attached to a movie detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Genre {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Full `/movie/{id}` record in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl MovieDetail {
    /// Runtime in minutes, treating the API's `0` as unknown.
    #[must_use]
    pub fn known_runtime(&self) -> Option<u32> {
        self.runtime.filter(|minutes| *minutes > 0)
    }

    /// Genre names joined for display, `None` when the list is empty.
    #[must_use]
    pub fn genre_names(&self) -> Option<String> {
        let names: Vec<&str> = self
            .genres
            .iter()
            .map(|g| g.name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }
}

/// Score shown for a vote average: `round(average * 10)` percent, or `None`
/// when the movie has no votes.
#[must_use]
pub fn score_percent(vote_average: f64) -> Option<u32> {
    if vote_average > 0.0 && vote_average.is_finite() {
        Some((vote_average * 10.0).round().clamp(0.0, 100.0) as u32)
    } else {
        None
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
