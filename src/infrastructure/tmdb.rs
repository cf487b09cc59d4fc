// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for The Movie Database (TMDb) v3 API.
//!
//! The client is cheap to clone (it shares one connection pool) so update
//! handlers can move a copy into each `Task`.
//!
//! The API key is resolved on every request: an explicit key (CLI), then the
//! `TMDB_API_KEY` environment variable, then the key from the config file.

use crate::domain::movie::{MovieDetail, SearchPage};
use crate::domain::search::SearchQuery;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Production API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Production image server root.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster width requested from the image server.
pub const POSTER_SIZE: &str = "w200";

const USER_AGENT: &str = concat!("MovieTitleTranslator/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced by the movie database adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No API key in the CLI arguments, environment or config file.
    #[error("no TMDb API key configured")]
    MissingApiKey,
    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::MissingApiKey => "error-api-missing-key",
            ApiError::Network(_) => "error-api-network",
            ApiError::Status { status: 401, .. } => "error-api-unauthorized",
            ApiError::Status { status: 404, .. } => "error-api-not-found",
            ApiError::Status { .. } => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
        }
    }

    /// Detail text passed to the localized message as `$detail`.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            ApiError::MissingApiKey => String::new(),
            ApiError::Network(msg) | ApiError::Decode(msg) => msg.clone(),
            ApiError::Status { status, message } => format!("{status} {message}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key as a query parameter.
        let err = err.without_url();
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Error payload shapes the API uses.
#[derive(Debug, Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    status_message: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl ErrorBody {
    fn message(self, status: StatusCode) -> String {
        if let Some(message) = self.status_message.filter(|m| !m.trim().is_empty()) {
            return message;
        }
        if !self.errors.is_empty() {
            return self.errors.join("; ");
        }
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    }
}

/// Connection settings for [`TmdbClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Key given on the command line; wins over every other source.
    pub explicit_api_key: Option<String>,
    /// Key from the config file; used when nothing else provides one.
    pub configured_api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            explicit_api_key: None,
            configured_api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Async TMDb client.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl TmdbClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { http, settings })
    }

    /// Resolves the API key for the next request.
    pub fn api_key(&self) -> Result<String, ApiError> {
        let env_key = std::env::var(ENV_API_KEY).ok();
        let key = [
            self.settings.explicit_api_key.as_deref(),
            env_key.as_deref(),
            self.settings.configured_api_key.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::MissingApiKey);
        key
    }

    /// Searches movie titles in the query's source language (first page,
    /// adult titles excluded).
    pub async fn search_movies(&self, query: &SearchQuery) -> Result<SearchPage, ApiError> {
        let api_key = self.api_key()?;
        let url = format!("{}/search/movie", self.api_root());
        tracing::info!(language = query.source_code(), query = query.text(), "searching movies");

        let request = self.http.get(url).header(ACCEPT, "application/json").query(&[
            ("page", "1"),
            ("include_adult", "false"),
            ("api_key", api_key.as_str()),
            ("language", query.source_code()),
            ("query", query.text()),
        ]);
        let page: SearchPage = send_json(request).await?;

        tracing::debug!(
            results = page.results.len(),
            total = page.total_results,
            "search completed"
        );
        Ok(page)
    }

    /// Fetches one movie's details in `language`.
    pub async fn movie_details(&self, movie_id: u64, language: &str) -> Result<MovieDetail, ApiError> {
        let api_key = self.api_key()?;
        let url = format!("{}/movie/{movie_id}", self.api_root());
        tracing::info!(movie_id, language, "fetching movie details");

        let request = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(&[("api_key", api_key.as_str()), ("language", language)]);
        send_json(request).await
    }

    /// Full image URL for a poster or backdrop path.
    #[must_use]
    pub fn poster_url(&self, path: &str) -> String {
        let root = self.settings.image_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{root}/{POSTER_SIZE}/{path}")
    }

    /// Downloads poster bytes.
    pub async fn fetch_poster(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(self.poster_url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn api_root(&self) -> &str {
        self.settings.api_base_url.trim_end_matches('/')
    }
}

/// Sends a request and decodes a JSON body, turning error statuses into
/// [`ApiError::Status`] with the server's message when it sent one.
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .unwrap_or_default()
            .message(status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(explicit: Option<&str>, configured: Option<&str>) -> TmdbClient {
        TmdbClient::new(ClientSettings {
            explicit_api_key: explicit.map(str::to_string),
            configured_api_key: configured.map(str::to_string),
            ..ClientSettings::default()
        })
        .expect("client builds")
    }

    #[test]
    fn explicit_key_wins() {
        let client = client_with(Some("cli-key"), Some("config-key"));
        assert_eq!(client.api_key().as_deref(), Ok("cli-key"));
    }

    #[test]
    fn blank_explicit_key_is_skipped() {
        let client = client_with(Some("   "), Some("config-key"));
        let key = client.api_key().expect("a key is available");
        // The environment may provide one; either way the blank key is never used.
        assert_ne!(key.trim(), "");
    }

    #[test]
    fn poster_url_joins_without_double_slashes() {
        let client = TmdbClient::new(ClientSettings {
            image_base_url: "https://img.example/t/p/".into(),
            ..ClientSettings::default()
        })
        .expect("client builds");
        assert_eq!(
            client.poster_url("/abc.jpg"),
            "https://img.example/t/p/w200/abc.jpg"
        );
    }

    #[test]
    fn error_body_prefers_status_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"status_code":7,"status_message":"Invalid API key"}"#)
                .expect("valid body");
        assert_eq!(body.message(StatusCode::UNAUTHORIZED), "Invalid API key");
    }

    #[test]
    fn error_body_joins_errors_array() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"errors":["query must be provided","page too big"]}"#)
                .expect("valid body");
        assert_eq!(
            body.message(StatusCode::UNPROCESSABLE_ENTITY),
            "query must be provided; page too big"
        );
    }

    #[test]
    fn empty_error_body_uses_reason_phrase() {
        assert_eq!(
            ErrorBody::default().message(StatusCode::NOT_FOUND),
            "Not Found"
        );
    }

    #[test]
    fn api_error_keys_distinguish_common_statuses() {
        let unauthorized = ApiError::Status {
            status: 401,
            message: "Invalid API key".into(),
        };
        let server = ApiError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(unauthorized.i18n_key(), "error-api-unauthorized");
        assert_eq!(server.i18n_key(), "error-api-status");
        assert_eq!(ApiError::MissingApiKey.i18n_key(), "error-api-missing-key");
        assert_eq!(server.detail(), "503 Service Unavailable");
    }
}
