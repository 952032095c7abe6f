// src/api/responses.rs
//! Serde types for the Prismic V2 REST API payloads.
//!
//! Two payload families matter here: the repository descriptor served at
//! the API root (refs, from which the master ref is resolved once per
//! process) and the document-search envelope (`results` + `next_page`)
//! shared by typed queries, UID queries, and opaque next-page fetches.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Repository descriptor returned by the API root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub refs: Vec<RepositoryRef>,
}

impl Repository {
    /// The ref the repository currently serves as its published content.
    pub fn master_ref(&self) -> Option<&RepositoryRef> {
        self.refs.iter().find(|r| r.is_master_ref)
    }
}

/// One content ref (master or release) of a repository.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // Wire fields beyond the master ref are kept for completeness
pub struct RepositoryRef {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub label: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

/// Envelope of every document-search response.
///
/// `next_page` is the opaque pagination cursor: a fully-formed URL for
/// the subsequent page, or null when no further page exists. It is never
/// reconstructed locally, only followed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(dead_code)] // Envelope counters are part of the wire shape
pub struct SearchResponse {
    pub page: u32,
    pub results_per_page: u32,
    pub results_size: u32,
    pub total_results_size: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    pub results: Vec<RawDocument>,
}

/// One raw document as the API returns it.
///
/// `data` stays an opaque JSON value here; the model layer decides per
/// flow which fields to whitelist into its display records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub href: Option<String>,
    #[serde(default, with = "publication_date")]
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Error body shape of most Prismic API failures.
#[derive(Debug, Clone, Deserialize)]
pub struct PrismicApiErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Legacy error body shape (`{"error": "..."}`), seen on auth failures.
#[derive(Debug, Clone, Deserialize)]
pub struct PrismicLegacyErrorResponse {
    pub error: String,
}

/// Publication timestamps as Prismic serializes them.
///
/// The API emits offsets without a colon (`+0000`), which strict RFC 3339
/// parsing rejects, so both spellings are accepted.
pub(crate) mod publication_date {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(input: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(input)
            .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw).map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_some(&timestamp.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}
