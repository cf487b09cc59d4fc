// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::infrastructure::ApiError;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Something was ignored or replaced by a default (orange, 5s).
    #[default]
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short marker drawn before the message.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is stored as an i18n key plus arguments and resolved at
/// render time, so toasts follow a locale change.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast for a movie database failure, carrying its detail text.
    pub fn api_error(error: &ApiError) -> Self {
        Self::error(error.i18n_key()).with_arg("detail", error.detail())
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| self.created_at.elapsed() >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::warning("test");
        let n2 = Notification::warning("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warnings_dismiss_after_five_seconds() {
        assert_eq!(
            Severity::Warning.auto_dismiss_duration(),
            Some(Duration::from_secs(5))
        );
        assert!(!Notification::warning("w").should_auto_dismiss());
        assert!(!Notification::error("e").should_auto_dismiss());
    }

    #[test]
    fn api_error_carries_key_and_detail() {
        let error = ApiError::Status {
            status: 401,
            message: "Invalid API key: You must be granted a valid key.".into(),
        };
        let notification = Notification::api_error(&error);

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "error-api-unauthorized");
        assert_eq!(
            notification.message_args(),
            &[(
                "detail".to_string(),
                "401 Invalid API key: You must be granted a valid key.".to_string()
            )]
        );
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::warning("notification-config-save-error")
            .with_arg("reason", "read-only file system");

        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_args().len(), 1);
    }
}
