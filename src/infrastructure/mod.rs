// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters for external services.
//!
//! - [`tmdb`]: HTTP client for The Movie Database API (search, details, posters)

pub mod tmdb;

pub use tmdb::{ApiError, ClientSettings, TmdbClient};
