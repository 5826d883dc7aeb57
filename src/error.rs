// src/error.rs
//! Application error types with structured error handling.
//!
//! Parse failures never show up here: the field parsers and formatters absorb
//! malformed input into neutral values. What remains are transport failures
//! (the backend could not be reached, answered non-2xx, or answered with the
//! wrong kind of body), local I/O failures during export, and form validation.

use std::fmt;
use thiserror::Error;

/// Coarse classification of a non-2xx HTTP status.
///
/// Views only care whether a resource is missing, whether the request itself
/// was wrong, or whether the backend failed, so the status vocabulary is kept
/// that small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatusClass {
    /// 404: the building (or cart entry) does not exist
    NotFound,
    /// Any other 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// 1xx/3xx reaching the error path (redirect loops, proxies)
    Unexpected,
}

impl HttpStatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unexpected,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for HttpStatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ClientError => write!(f, "client_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::Unexpected => write!(f, "unexpected_status"),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// Non-2xx answer from the backend. `body` is the best-effort response
    /// text, or the status reason phrase when the body was empty.
    #[error("API error {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Expected a {expected} response from {url}, got '{actual}'")]
    UnexpectedContentType {
        url: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart reload after a command failed; the payload describes why.
    #[error("Could not load cart: {0}")]
    CartUnavailable(String),

    /// The view was torn down while the named request was in flight.
    #[error("View closed before {0} completed")]
    ViewClosed(&'static str),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Classifies a transport error by status; `None` for every other variant.
    pub fn status_class(&self) -> Option<HttpStatusClass> {
        match self {
            AppError::Transport { status, .. } => Some(HttpStatusClass::from_status(*status)),
            AppError::NetworkFailure(err) => err
                .status()
                .map(|s| HttpStatusClass::from_status(s.as_u16())),
            _ => None,
        }
    }

    /// Whether the failure means the backend has no such resource.
    pub fn is_not_found(&self) -> bool {
        self.status_class()
            .map(|class| class.is_not_found())
            .unwrap_or(false)
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "Formatting error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_message_carries_status_and_body() {
        let err = AppError::Transport {
            status: 404,
            body: "{\"detail\":\"Building not found\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error 404: {\"detail\":\"Building not found\"}"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn status_classes() {
        assert_eq!(HttpStatusClass::from_status(404), HttpStatusClass::NotFound);
        assert_eq!(HttpStatusClass::from_status(400), HttpStatusClass::ClientError);
        assert_eq!(HttpStatusClass::from_status(503), HttpStatusClass::ServerError);
        assert_eq!(HttpStatusClass::from_status(302), HttpStatusClass::Unexpected);
    }

    #[test]
    fn non_transport_errors_have_no_status() {
        let err = AppError::MalformedResponse("bad".into());
        assert_eq!(err.status_class(), None);
        assert!(!err.is_not_found());
    }
}
