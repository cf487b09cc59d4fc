// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **API**: Movie database endpoints and request timeout
//! - **Search**: Overview shortening on result cards

pub use crate::domain::card::DEFAULT_OVERVIEW_LIMIT;
pub use crate::infrastructure::tmdb::{DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL};

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Shortest overview limit accepted from the config file.
pub const MIN_OVERVIEW_LIMIT: usize = 40;

/// Longest overview limit accepted from the config file.
pub const MAX_OVERVIEW_LIMIT: usize = 1000;

const _: () = {
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(MIN_OVERVIEW_LIMIT <= DEFAULT_OVERVIEW_LIMIT);
    assert!(DEFAULT_OVERVIEW_LIMIT <= MAX_OVERVIEW_LIMIT);
};
