// src/model/post.rs
//! Post records as the pages display them.

use crate::api::responses::RawDocument;
use crate::model::rich_text::RichTextBlock;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// One entry of the listing page.
///
/// Produced by whitelisting a raw document: UID, publication timestamp,
/// title, subtitle, and author pass through; every other field the API
/// may return is dropped. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    /// Route parameter of the detail page; also the list key.
    pub uid: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl PostSummary {
    /// Normalizes one raw API record into a listing entry.
    pub fn from_document(document: &RawDocument) -> Self {
        Self {
            uid: document.uid.clone(),
            published_at: document.first_publication_date,
            title: text_field(&document.data, "title"),
            subtitle: text_field(&document.data, "subtitle"),
            author: text_field(&document.data, "author"),
        }
    }
}

/// The full record behind one detail page.
///
/// Built per request and discarded with the page; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub published_at: Option<DateTime<FixedOffset>>,
    pub title: String,
    pub banner_url: String,
    pub author: String,
    /// Content sections in document order.
    pub sections: Vec<ContentSection>,
}

/// One titled section of a post body.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

impl PostDetail {
    /// Normalizes one raw API record into a detail record.
    ///
    /// Section bodies must be well-formed rich text; anything else is a
    /// malformed response. Scalar fields degrade to empty strings the
    /// way an absent CMS field renders as an empty slot.
    pub fn from_document(document: &RawDocument) -> Result<Self, crate::error::AppError> {
        let sections = match document.data.get("content") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(parse_section)
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(crate::error::AppError::MalformedResponse(format!(
                    "Document {} has a non-array 'content' field: {}",
                    document.id, other
                )))
            }
            None => Vec::new(),
        };

        Ok(Self {
            published_at: document.first_publication_date,
            title: text_field(&document.data, "title"),
            banner_url: banner_url(&document.data),
            author: text_field(&document.data, "author"),
            sections,
        })
    }
}

fn parse_section(entry: &Value) -> Result<ContentSection, crate::error::AppError> {
    let heading = entry
        .get("heading")
        .map(text_value)
        .unwrap_or_default();

    let body = match entry.get("body") {
        Some(body) => serde_json::from_value(body.clone())?,
        None => Vec::new(),
    };

    Ok(ContentSection { heading, body })
}

fn banner_url(data: &Value) -> String {
    data.get("banner")
        .and_then(|banner| banner.get("url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reads a display field that the CMS serves either as a plain string or
/// as a structured-text array (title-style fields are arrays of blocks).
fn text_field(data: &Value, name: &str) -> String {
    data.get(name).map(text_value).unwrap_or_default()
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}
