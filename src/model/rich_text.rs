// src/model/rich_text.rs
//! Structured rich text as the Prismic API serializes it.
//!
//! A rich-text field is an ordered sequence of blocks. Each text block
//! carries its plain text plus styling spans addressed by character
//! offsets; spans may nest but never partially overlap. The model stays
//! output-agnostic — HTML conversion lives in the formatting layer.

use serde::{Deserialize, Serialize};

/// One block of a rich-text field, tagged by the API's `type` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RichTextBlock {
    #[serde(rename = "paragraph")]
    Paragraph(TextBlock),
    #[serde(rename = "heading1")]
    Heading1(TextBlock),
    #[serde(rename = "heading2")]
    Heading2(TextBlock),
    #[serde(rename = "heading3")]
    Heading3(TextBlock),
    #[serde(rename = "heading4")]
    Heading4(TextBlock),
    #[serde(rename = "heading5")]
    Heading5(TextBlock),
    #[serde(rename = "heading6")]
    Heading6(TextBlock),
    #[serde(rename = "list-item")]
    ListItem(TextBlock),
    #[serde(rename = "o-list-item")]
    OrderedListItem(TextBlock),
    #[serde(rename = "preformatted")]
    Preformatted(TextBlock),
    #[serde(rename = "image")]
    Image(ImageBlock),
    #[serde(rename = "embed")]
    Embed(EmbedBlock),
    /// A block type this model doesn't recognize yet; skipped at render.
    #[serde(other)]
    Unsupported,
}

impl RichTextBlock {
    /// The block's plain text, where it has any.
    #[allow(dead_code)] // Public API - used by library consumers
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Paragraph(b)
            | Self::Heading1(b)
            | Self::Heading2(b)
            | Self::Heading3(b)
            | Self::Heading4(b)
            | Self::Heading5(b)
            | Self::Heading6(b)
            | Self::ListItem(b)
            | Self::OrderedListItem(b)
            | Self::Preformatted(b) => Some(&b.text),
            Self::Image(_) | Self::Embed(_) | Self::Unsupported => None,
        }
    }
}

/// Text content shared by every textual block kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

/// An image block with its hosted URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// An embed block carrying oEmbed-provided HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedBlock {
    #[serde(default)]
    pub oembed: Oembed,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Oembed {
    #[serde(default)]
    pub html: Option<String>,
}

/// One styling span over a block's text, in character offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub kind: SpanKind,
}

/// What a span styles its range as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink { data: HyperlinkData },
    /// A span type this model doesn't recognize yet; leaves its range
    /// unstyled.
    #[serde(other)]
    Other,
}

/// Target of a hyperlink span.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HyperlinkData {
    #[serde(default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}
