// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! There is no retry or recovery anywhere in the build: every failure
//! surfaces here as a typed value and terminates the build at the top
//! level. What the taxonomy buys is a faithful report of *which* stage
//! failed and what the API actually said.

use std::fmt;
use thiserror::Error;

/// Prismic API error conditions as a typed vocabulary.
///
/// Instead of matching against magic strings like `"api_security_error"`,
/// the domain vocabulary is encoded in the type system. Each variant
/// tells you exactly what the Prismic API reported and enables
/// pattern-based handling without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrismicErrorCode {
    /// Access token is missing, invalid, or expired
    SecurityError,
    /// Query parameters failed Prismic's validation (bad predicate, bad ref)
    ValidationFailed,
    /// The requested document or endpoint does not exist
    NotFound,
    /// Prismic internal server error
    InternalError,
    /// Prismic is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error type this client doesn't recognize yet
    Unknown(String),
}

impl PrismicErrorCode {
    /// Parse a Prismic API error type string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "api_security_error" => Self::SecurityError,
            "api_validation_error" => Self::ValidationFailed,
            "api_notfound_error" | "not-found" => Self::NotFound,
            "internal-server-error" => Self::InternalError,
            "service-unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::SecurityError,
            503 => Self::ServiceUnavailable,
            _ => Self::HttpStatus(status),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    #[allow(dead_code)] // Used by lib consumers
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether this error points at credentials rather than content.
    #[allow(dead_code)] // Used by lib consumers
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::SecurityError)
    }
}

impl fmt::Display for PrismicErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecurityError => write!(f, "api_security_error"),
            Self::ValidationFailed => write!(f, "api_validation_error"),
            Self::NotFound => write!(f, "api_notfound_error"),
            Self::InternalError => write!(f, "internal-server-error"),
            Self::ServiceUnavailable => write!(f, "service-unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
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

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Prismic API returned an error ({code}): {message}")]
    PrismicService {
        code: PrismicErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No '{doc_type}' document with UID '{uid}'")]
    DocumentNotFound { doc_type: String, uid: String },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
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
