// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core rules of the translator, independent of the UI toolkit
//! and of the HTTP client.
//!
//! Only `serde` derives (for the movie database's JSON shapes) and `chrono`
//! (release date parsing) are used here; nothing in this layer performs I/O.
//!
//! # Modules
//!
//! - [`language`]: The language table ([`LanguageTable`](language::LanguageTable))
//!   and the source/destination pair ([`LanguagePair`](language::LanguagePair))
//! - [`search`]: Query validation ([`SearchQuery`](search::SearchQuery),
//!   [`ValidationError`](search::ValidationError)) and request
//!   [`Generation`](search::Generation) tags
//! - [`movie`]: Search results and movie details as returned by the API
//! - [`card`]: Mapping of search results into [`MovieCard`](card::MovieCard) view models

pub mod card;
pub mod language;
pub mod movie;
pub mod search;
