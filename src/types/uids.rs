// src/types/uids.rs
//! The unique document identifier (UID) used as the route parameter.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prismic UIDs are URL slugs: lowercase alphanumeric runs joined by
/// single hyphens.
static UID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("UID pattern is valid"));

/// Maximum accepted UID length. Prismic caps slugs well below this;
/// the bound exists so a malformed response can't produce absurd paths.
const UID_MAX_LENGTH: usize = 100;

/// A validated document UID.
///
/// Doubles as the list key on the listing page and the route parameter
/// of the detail page (`/post/{uid}`), so validation here is what keeps
/// output paths safe without any later sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentUid(String);

impl DocumentUid {
    /// Parse and validate a raw UID string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::InvalidUid {
                reason: "UID cannot be empty".to_string(),
            });
        }

        if input.len() > UID_MAX_LENGTH {
            return Err(ValidationError::InvalidUid {
                reason: format!(
                    "UID length {} exceeds maximum {}",
                    input.len(),
                    UID_MAX_LENGTH
                ),
            });
        }

        if !UID_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidUid {
                reason: format!(
                    "UID '{}' must be lowercase alphanumeric segments joined by single hyphens",
                    input
                ),
            });
        }

        Ok(Self(input.to_string()))
    }

    /// Get the UID as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentUid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        DocumentUid::parse(&value).map_err(serde::de::Error::custom)
    }
}
