// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization of the user interface using the Fluent
//! localization system. Translations are embedded at compile time from
//! `assets/i18n/*.ftl`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config or system settings
//! - Message interpolation through Fluent arguments
//! - Fallback to `en-US` when a locale or a message is missing
//!
//! The interface language is independent of the movie languages picked in
//! the search panel: those only change which language the movie database
//! answers in.

pub mod fluent;

pub use fluent::I18n;
