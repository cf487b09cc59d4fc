// SPDX-License-Identifier: MPL-2.0
//! `movie_title_translator` looks up movie titles on The Movie Database in one
//! language and shows their translation in another, built with the Iced GUI
//! framework.
//!
//! It provides title search with input validation, result cards with posters,
//! a translation modal, internationalization with Fluent and a small
//! TOML-based preference file.

#![doc(html_root_url = "https://docs.rs/movie_title_translator/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
