// tests/unit/formatting.rs
//! Unit tests for display formatting: dates, rich text, and templates

use pretty_assertions::assert_eq;
use prismic2site::{
    format_publication_date, rich_text_to_html, PageTemplates, PostDetail, RawDocument, Remote,
    RichTextBlock, LOADING_LABEL, READING_TIME_PLACEHOLDER,
};
use serde_json::json;

fn blocks(body: serde_json::Value) -> Vec<RichTextBlock> {
    serde_json::from_value(body).unwrap()
}

#[cfg(test)]
mod date_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prismic2site::SearchResponse;

    #[test]
    fn formats_publication_dates_in_pt_br() {
        let page: SearchResponse = serde_json::from_value(json!({
            "page": 1,
            "results_per_page": 1,
            "results_size": 1,
            "total_results_size": 1,
            "total_pages": 1,
            "next_page": null,
            "results": [{
                "id": "doc",
                "uid": "um-post",
                "type": "posts",
                "first_publication_date": "2021-08-01T09:00:00+0000",
                "data": {}
            }]
        }))
        .unwrap();

        let published_at = page.results[0].first_publication_date;
        assert_eq!(
            format_publication_date(published_at.as_ref()),
            "01 ago 2021"
        );
    }

    #[test]
    fn missing_date_formats_to_empty() {
        assert_eq!(format_publication_date(None), "");
    }
}

#[cfg(test)]
mod rich_text_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_mixed_body_in_document_order() {
        let html = rich_text_to_html(&blocks(json!([
            { "type": "heading2", "text": "Proin et varius", "spans": [] },
            { "type": "paragraph", "text": "Nulla auctor sit amet", "spans": [
                { "start": 0, "end": 5, "type": "strong" }
            ]},
            { "type": "list-item", "text": "primeiro", "spans": [] },
            { "type": "list-item", "text": "segundo", "spans": [] }
        ])));

        assert_eq!(
            html,
            "<h2>Proin et varius</h2>\n\
             <p><strong>Nulla</strong> auctor sit amet</p>\n\
             <ul>\n<li>primeiro</li>\n<li>segundo</li>\n</ul>\n"
        );
    }

    #[test]
    fn script_injection_is_escaped() {
        let html = rich_text_to_html(&blocks(json!([
            { "type": "paragraph", "text": "<script>alert(1)</script>", "spans": [] }
        ])));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

#[cfg(test)]
mod template_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detail_with_sections(count: usize) -> PostDetail {
        let sections = (0..count)
            .map(|index| {
                json!({
                    "heading": format!("Seção {}", index + 1),
                    "body": [
                        { "type": "paragraph", "text": format!("corpo {}", index + 1), "spans": [] }
                    ]
                })
            })
            .collect::<Vec<_>>();

        let document: RawDocument = serde_json::from_value(json!({
            "id": "doc",
            "uid": "meu-post",
            "type": "posts",
            "first_publication_date": "2021-03-15T19:25:28+0000",
            "data": {
                "title": "Meu post",
                "author": "Autora",
                "banner": { "url": "https://images.example/banner.png" },
                "content": sections
            }
        }))
        .unwrap();

        PostDetail::from_document(&document).unwrap()
    }

    #[test]
    fn detail_page_renders_one_section_element_per_section() {
        let templates = PageTemplates::load(None).unwrap();
        let page = templates
            .render_post_state(&Remote::Ready(detail_with_sections(2)))
            .unwrap();

        assert_eq!(page.as_str().matches("<section").count(), 2);
        let first = page.as_str().find("Seção 1").unwrap();
        let second = page.as_str().find("Seção 2").unwrap();
        assert!(first < second);
        assert!(page.as_str().contains(READING_TIME_PLACEHOLDER));
    }

    #[test]
    fn loading_and_ready_renderings_are_disjoint() {
        let templates = PageTemplates::load(None).unwrap();

        let loading = templates
            .render_post_state(&Remote::Loading)
            .unwrap();
        assert!(loading.as_str().contains(LOADING_LABEL));
        assert!(!loading.as_str().contains("<section"));
        assert!(!loading.as_str().contains("banner"));

        let ready = templates
            .render_post_state(&Remote::Ready(detail_with_sections(1)))
            .unwrap();
        assert!(!ready.as_str().contains(LOADING_LABEL));
        assert!(ready.as_str().contains("banner"));
    }
}
