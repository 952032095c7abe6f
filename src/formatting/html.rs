// src/formatting/html.rs
//! Converts structured rich text into HTML.
//!
//! Block-level structure maps one block to one element, except list
//! items: consecutive items of the same list kind are grouped under a
//! single `<ul>`/`<ol>`. Span-level styling is applied by character
//! offset; text content is HTML-escaped, produced markup is not.

use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::rich_text::{RichTextBlock, Span, SpanKind, TextBlock};
use std::collections::BTreeMap;

/// Renders a rich-text field as an HTML fragment.
pub fn rich_text_to_html(blocks: &[RichTextBlock]) -> String {
    let mut out = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        let list_kind = match block {
            RichTextBlock::ListItem(_) => Some(ListKind::Unordered),
            RichTextBlock::OrderedListItem(_) => Some(ListKind::Ordered),
            _ => None,
        };

        if open_list != list_kind {
            if let Some(kind) = open_list {
                out.push_str(kind.close_tag());
                out.push('\n');
            }
            if let Some(kind) = list_kind {
                out.push_str(kind.open_tag());
                out.push('\n');
            }
            open_list = list_kind;
        }

        match block {
            RichTextBlock::Paragraph(text) => wrap(&mut out, "p", text),
            RichTextBlock::Heading1(text) => wrap(&mut out, "h1", text),
            RichTextBlock::Heading2(text) => wrap(&mut out, "h2", text),
            RichTextBlock::Heading3(text) => wrap(&mut out, "h3", text),
            RichTextBlock::Heading4(text) => wrap(&mut out, "h4", text),
            RichTextBlock::Heading5(text) => wrap(&mut out, "h5", text),
            RichTextBlock::Heading6(text) => wrap(&mut out, "h6", text),
            RichTextBlock::ListItem(text) | RichTextBlock::OrderedListItem(text) => {
                wrap(&mut out, "li", text)
            }
            RichTextBlock::Preformatted(text) => wrap(&mut out, "pre", text),
            RichTextBlock::Image(image) => {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&image.url),
                    escape_html(image.alt.as_deref().unwrap_or_default())
                ));
            }
            RichTextBlock::Embed(embed) => {
                // oEmbed HTML comes from the provider already formed
                if let Some(html) = &embed.oembed.html {
                    out.push_str(html);
                    out.push('\n');
                }
            }
            RichTextBlock::Unsupported => {
                log::debug!("Skipping unsupported rich-text block");
            }
        }
    }

    if let Some(kind) = open_list {
        out.push_str(kind.close_tag());
        out.push('\n');
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

fn wrap(out: &mut String, element: &str, block: &TextBlock) {
    out.push('<');
    out.push_str(element);
    out.push('>');
    out.push_str(&spans_to_html(block));
    out.push_str("</");
    out.push_str(element);
    out.push_str(">\n");
}

/// Applies a block's styling spans over its escaped text.
///
/// Spans may nest but never partially overlap. At a shared boundary the
/// wider span opens first and closes last, which keeps the produced
/// tags well nested; ranges wider than the text are clamped.
fn spans_to_html(block: &TextBlock) -> String {
    let characters: Vec<char> = block.text.chars().collect();
    let total = characters.len();

    let spans: Vec<(usize, &Span)> = block
        .spans
        .iter()
        .filter(|span| span.start < span.end && span.start < total)
        .filter(|span| !matches!(span.kind, SpanKind::Other))
        .enumerate()
        .collect();

    if spans.is_empty() {
        return escape_html(&block.text);
    }

    let mut opens: BTreeMap<usize, Vec<(usize, &Span)>> = BTreeMap::new();
    let mut closes: BTreeMap<usize, Vec<(usize, &Span)>> = BTreeMap::new();
    for &(index, span) in &spans {
        opens.entry(span.start).or_default().push((index, span));
        closes
            .entry(span.end.min(total))
            .or_default()
            .push((index, span));
    }
    for starting in opens.values_mut() {
        starting.sort_by(|(ai, a), (bi, b)| b.end.cmp(&a.end).then(ai.cmp(bi)));
    }
    for ending in closes.values_mut() {
        ending.sort_by(|(ai, a), (bi, b)| b.start.cmp(&a.start).then(bi.cmp(ai)));
    }

    let mut out = String::with_capacity(block.text.len() + spans.len() * 16);
    for (position, character) in characters.iter().enumerate() {
        emit_boundary(&mut out, &closes, &opens, position);
        push_escaped(&mut out, *character);
    }
    if let Some(ending) = closes.get(&total) {
        for (_, span) in ending {
            out.push_str(&close_tag(&span.kind));
        }
    }

    out
}

fn emit_boundary(
    out: &mut String,
    closes: &BTreeMap<usize, Vec<(usize, &Span)>>,
    opens: &BTreeMap<usize, Vec<(usize, &Span)>>,
    position: usize,
) {
    if let Some(ending) = closes.get(&position) {
        for (_, span) in ending {
            out.push_str(&close_tag(&span.kind));
        }
    }
    if let Some(starting) = opens.get(&position) {
        for (_, span) in starting {
            out.push_str(&open_tag(&span.kind));
        }
    }
}

fn open_tag(kind: &SpanKind) -> String {
    match kind {
        SpanKind::Strong => "<strong>".to_string(),
        SpanKind::Em => "<em>".to_string(),
        SpanKind::Hyperlink { data } => format!(
            "<a href=\"{}\">",
            escape_html(data.url.as_deref().unwrap_or_default())
        ),
        SpanKind::Other => String::new(),
    }
}

fn close_tag(kind: &SpanKind) -> String {
    match kind {
        SpanKind::Strong => "</strong>".to_string(),
        SpanKind::Em => "</em>".to_string(),
        SpanKind::Hyperlink { .. } => "</a>".to_string(),
        SpanKind::Other => String::new(),
    }
}

/// Escapes text for placement in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        push_escaped(&mut out, character);
    }
    out
}

fn push_escaped(out: &mut String, character: char) {
    match character {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        other => out.push(other),
    }
}
