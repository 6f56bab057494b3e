//! Core error types for the inertia-rs client layer.
//!
//! This module provides the [`InertiaError`] enum covering route-reversal
//! errors, page-registry errors, document-scraping errors, configuration
//! errors, and IO errors. The reversal variants mirror the failure modes of
//! Django's `reverse()` as surfaced to the browser by `django-js-reverse`.

use thiserror::Error;

/// The primary error type for the inertia-rs client layer.
///
/// Reversal failures are distinguishable by variant so that callers can tell
/// an unknown route from a malformed argument set without parsing messages.
#[derive(Error, Debug)]
pub enum InertiaError {
    // ── URL reversal ─────────────────────────────────────────────────

    /// The requested route name is not present in the route table.
    #[error("Reverse for '{0}' not found in the route table")]
    UnknownRoute(String),

    /// Arguments were supplied for a route whose pattern has no placeholders.
    #[error("Route '{route}' does not expect any arguments")]
    UnexpectedArguments {
        /// The route that was looked up.
        route: String,
    },

    /// A required placeholder was absent from a keyed argument mapping, or a
    /// parameterized route was reversed without any arguments.
    #[error("Argument '{name}' was not provided for route '{route}'")]
    MissingArgument {
        /// The route that was looked up.
        route: String,
        /// The placeholder with no corresponding value.
        name: String,
    },

    /// A positional argument list did not match the placeholder count.
    #[error("Wrong number of arguments for route '{route}': expected {expected}, got {given}")]
    ArgumentCountMismatch {
        /// The route that was looked up.
        route: String,
        /// The number of placeholders in the pattern.
        expected: usize,
        /// The number of values that were supplied.
        given: usize,
    },

    // ── Pages ────────────────────────────────────────────────────────

    /// The page component is not present in the page registry.
    #[error("Page component '{0}' is not registered")]
    UnknownPage(String),

    // ── Document ─────────────────────────────────────────────────────

    /// A required element or input was absent from a rendered document.
    #[error("Missing document element: {0}")]
    MissingElement(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A route table, page registry, or pattern is invalid.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// A configuration value or file is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred while parsing JSON payloads or tables.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InertiaError {
    /// Returns `true` if this error indicates a broken link configuration.
    ///
    /// Reversal and registry failures are programming defects rather than
    /// runtime conditions: the integrating application should surface them
    /// loudly in development and fail safe (omit the link or render a
    /// fallback) in production.
    pub const fn is_link_defect(&self) -> bool {
        matches!(
            self,
            Self::UnknownRoute(_)
                | Self::UnexpectedArguments { .. }
                | Self::MissingArgument { .. }
                | Self::ArgumentCountMismatch { .. }
                | Self::UnknownPage(_)
        )
    }
}

/// A convenience type alias for `Result<T, InertiaError>`.
pub type InertiaResult<T> = Result<T, InertiaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_display() {
        let err = InertiaError::UnknownRoute("no:such:route".into());
        assert_eq!(
            err.to_string(),
            "Reverse for 'no:such:route' not found in the route table"
        );
    }

    #[test]
    fn test_unexpected_arguments_display() {
        let err = InertiaError::UnexpectedArguments {
            route: "accounts:login".into(),
        };
        assert_eq!(
            err.to_string(),
            "Route 'accounts:login' does not expect any arguments"
        );
    }

    #[test]
    fn test_missing_argument_display() {
        let err = InertiaError::MissingArgument {
            route: "management:user_detail".into(),
            name: "user_id".into(),
        };
        assert!(err.to_string().contains("user_id"));
        assert!(err.to_string().contains("management:user_detail"));
    }

    #[test]
    fn test_argument_count_mismatch_display() {
        let err = InertiaError::ArgumentCountMismatch {
            route: "accounts:reset_password_from_key".into(),
            expected: 2,
            given: 1,
        };
        assert!(err.to_string().contains("expected 2"));
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_link_defect_classification() {
        assert!(InertiaError::UnknownRoute("x".into()).is_link_defect());
        assert!(InertiaError::UnexpectedArguments { route: "x".into() }.is_link_defect());
        assert!(InertiaError::MissingArgument {
            route: "x".into(),
            name: "y".into()
        }
        .is_link_defect());
        assert!(InertiaError::ArgumentCountMismatch {
            route: "x".into(),
            expected: 1,
            given: 0
        }
        .is_link_defect());
        assert!(InertiaError::UnknownPage("x".into()).is_link_defect());
        assert!(!InertiaError::ImproperlyConfigured("x".into()).is_link_defect());
        assert!(!InertiaError::MissingElement("x".into()).is_link_defect());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InertiaError = io_err.into();
        assert!(err.to_string().contains("file missing"));
        assert!(!err.is_link_defect());
    }
}
