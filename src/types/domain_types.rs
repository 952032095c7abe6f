// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Access token for a private Prismic repository.
///
/// Prismic passes the token as an `access_token` query parameter rather
/// than an Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidAccessToken {
                reason: "Access token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidAccessToken {
                reason: "Access token cannot contain whitespace".to_string(),
            });
        }

        if token.len() < 8 {
            return Err(ValidationError::InvalidAccessToken {
                reason: "Access token is too short".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display
        write!(f, "{}...", &self.0[..4.min(self.0.len())])
    }
}

/// Validated Prismic repository API endpoint.
///
/// Stored with a trailing slash on the path so that joining relative
/// segments (`documents/search`) never drops the `/api/v2` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Create a new validated endpoint
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut url = Url::parse(input).map_err(|e| ValidationError::InvalidEndpoint {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ValidationError::InvalidEndpoint {
                url: input.to_string(),
                reason: "Only HTTP and HTTPS endpoints are supported".to_string(),
            });
        }

        if url.query().is_some() {
            return Err(ValidationError::InvalidEndpoint {
                url: input.to_string(),
                reason: "Endpoint must not carry query parameters".to_string(),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolve a relative API segment against this endpoint.
    pub fn join(&self, segment: &str) -> Result<Url, url::ParseError> {
        self.0.join(segment)
    }

    /// Get the endpoint as a string
    #[allow(dead_code)] // Used by lib consumers
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the underlying URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Prismic custom type (e.g. `posts`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentType(String);

impl DocumentType {
    /// Create a new document type with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::InvalidDocumentType {
                name,
                reason: "Document type cannot be empty".to_string(),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidDocumentType {
                name: name.clone(),
                reason: "Document type can only contain lowercase letters, digits, underscores, and hyphens".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the type as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template name with validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    /// Create a new template name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::InvalidTemplateName {
                name: name.clone(),
                reason: "Template name cannot be empty".to_string(),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidTemplateName {
                name: name.clone(),
                reason: "Template name can only contain alphanumeric characters, hyphens, and underscores"
                    .to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the template name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully rendered HTML page, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage(String);

impl RenderedPage {
    /// Wrap rendered HTML
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// View the HTML
    #[allow(dead_code)] // Used by lib consumers
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the page is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the HTML string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
