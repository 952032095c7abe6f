// tests/unit/model.rs
//! Unit tests for normalization of raw documents into display records

use pretty_assertions::assert_eq;
use prismic2site::{PostDetail, PostSummary, RawDocument};
use serde_json::json;

/// Helper to build a raw API document around a `data` payload
fn raw_document(data: serde_json::Value) -> RawDocument {
    serde_json::from_value(json!({
        "id": "YFa2sxAAACIAmLEm",
        "uid": "como-utilizar-hooks",
        "type": "posts",
        "href": "https://example-repo.cdn.prismic.io/api/v2/documents/search?...",
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": data
    }))
    .unwrap()
}

#[cfg(test)]
mod summary_normalization_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whitelists_exactly_the_display_fields() {
        let document = raw_document(json!({
            "title": "Como utilizar Hooks",
            "subtitle": "Pensando em sincronização em vez de ciclos de vida",
            "author": "Joseph Oliveira",
            "banner": { "url": "https://images.example/banner.png" },
            "content": [{ "heading": "Seção", "body": [] }],
            "seo_description": "must be dropped",
            "internal_notes": "must be dropped"
        }));

        let summary = PostSummary::from_document(&document);

        assert_eq!(summary.uid.as_deref(), Some("como-utilizar-hooks"));
        assert_eq!(summary.title, "Como utilizar Hooks");
        assert_eq!(
            summary.subtitle,
            "Pensando em sincronização em vez de ciclos de vida"
        );
        assert_eq!(summary.author, "Joseph Oliveira");
        assert_eq!(
            summary
                .published_at
                .map(|timestamp| timestamp.to_rfc3339()),
            Some("2021-03-15T19:25:28+00:00".to_string())
        );
    }

    #[test]
    fn tolerates_absent_uid_and_date() {
        let document: RawDocument = serde_json::from_value(json!({
            "id": "YFa2sxAAACIAmLEm",
            "type": "posts",
            "data": { "title": "Sem rota" }
        }))
        .unwrap();

        let summary = PostSummary::from_document(&document);
        assert!(summary.uid.is_none());
        assert!(summary.published_at.is_none());
        assert_eq!(summary.title, "Sem rota");
    }
}

#[cfg(test)]
mod detail_normalization_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn carries_banner_and_ordered_sections() {
        let document = raw_document(json!({
            "title": "Como utilizar Hooks",
            "author": "Joseph Oliveira",
            "banner": { "url": "https://images.example/banner.png", "alt": "Banner" },
            "content": [
                {
                    "heading": "Proin et varius",
                    "body": [
                        { "type": "paragraph", "text": "primeiro bloco", "spans": [] }
                    ]
                },
                {
                    "heading": "Cras laoreet mi",
                    "body": [
                        { "type": "paragraph", "text": "segundo bloco", "spans": [] }
                    ]
                }
            ]
        }));

        let detail = PostDetail::from_document(&document).unwrap();

        assert_eq!(detail.title, "Como utilizar Hooks");
        assert_eq!(detail.banner_url, "https://images.example/banner.png");
        let headings: Vec<_> = detail
            .sections
            .iter()
            .map(|section| section.heading.as_str())
            .collect();
        assert_eq!(headings, ["Proin et varius", "Cras laoreet mi"]);
    }

    #[test]
    fn structured_text_headings_flatten_to_plain_text() {
        let document = raw_document(json!({
            "content": [{
                "heading": [
                    { "type": "heading2", "text": "Título estruturado", "spans": [] }
                ],
                "body": []
            }]
        }));

        let detail = PostDetail::from_document(&document).unwrap();
        assert_eq!(detail.sections[0].heading, "Título estruturado");
    }

    #[test]
    fn malformed_section_body_is_an_error() {
        let document = raw_document(json!({
            "content": [{ "heading": "x", "body": [{ "type": 42 }] }]
        }));
        assert!(PostDetail::from_document(&document).is_err());
    }
}
