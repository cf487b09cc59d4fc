// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`search_panel`] - Search form, validation feedback and result list
//! - [`movie_card`] - One search result rendered as a card
//! - [`translation_modal`] - Movie details in the destination language
//! - [`poster`] - Poster images with the "no image" placeholder
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod movie_card;
pub mod notifications;
pub mod poster;
pub mod search_panel;
pub mod styles;
pub mod theming;
pub mod translation_modal;
