// tests/integration/detail_flow.rs
//! The detail flow end to end: route enumeration, fetch by UID,
//! rendering with the loading placeholder.

use super::support::{post_document, posts_type, search_page, InMemoryRepository};
use pretty_assertions::assert_eq;
use prismic2site::{
    enumerate_document_uids, ContentRepository, DocumentUid, PageTemplates, PostDetail, Remote,
    AppError, LOADING_LABEL,
};

#[tokio::test]
async fn enumeration_pages_until_cursor_is_null() {
    let mut repository = InMemoryRepository::default();
    repository.typed_pages = vec![search_page(
        &["primeiro", "segundo"],
        Some("https://repo/page2"),
    )];
    repository.pages_by_url.insert(
        "https://repo/page2".to_string(),
        search_page(&["terceiro"], None),
    );

    let routes = enumerate_document_uids(&repository, &posts_type(), None)
        .await
        .unwrap();

    let uids: Vec<_> = routes.uids.iter().map(DocumentUid::as_str).collect();
    assert_eq!(uids, ["primeiro", "segundo", "terceiro"]);
    assert_eq!(routes.pages_fetched, 2);
    assert_eq!(repository.request_count(), 2);
}

#[tokio::test]
async fn enumeration_skips_documents_without_uids() {
    let mut repository = InMemoryRepository::default();
    let mut page = search_page(&["com-uid"], None);
    page.results[0].uid = None;
    repository.typed_pages = vec![page];

    let routes = enumerate_document_uids(&repository, &posts_type(), None)
        .await
        .unwrap();
    assert!(routes.uids.is_empty());
}

#[tokio::test]
async fn fetched_post_renders_its_sections_in_order() {
    let mut repository = InMemoryRepository::default();
    repository.documents.insert(
        "meu-post".to_string(),
        post_document(
            "meu-post",
            &[
                ("Proin et varius", "primeiro corpo"),
                ("Cras laoreet mi", "segundo corpo"),
            ],
        ),
    );

    let uid = DocumentUid::parse("meu-post").unwrap();
    let document = repository.fetch_by_uid(&posts_type(), &uid).await.unwrap();
    let detail = PostDetail::from_document(&document).unwrap();

    let templates = PageTemplates::load(None).unwrap();
    let rendered = templates
        .render_post_state(&Remote::Ready(detail))
        .unwrap();

    assert_eq!(rendered.as_str().matches("<section").count(), 2);
    let first = rendered.as_str().find("Proin et varius").unwrap();
    let second = rendered.as_str().find("Cras laoreet mi").unwrap();
    assert!(first < second);
    assert!(rendered.as_str().contains("primeiro corpo"));
    assert!(!rendered.as_str().contains(LOADING_LABEL));
}

#[tokio::test]
async fn unknown_uid_is_a_typed_not_found() {
    let repository = InMemoryRepository::default();
    let uid = DocumentUid::parse("nao-existe").unwrap();

    let result = repository.fetch_by_uid(&posts_type(), &uid).await;
    assert!(matches!(
        result,
        Err(AppError::DocumentNotFound { uid, .. }) if uid == "nao-existe"
    ));
}

#[tokio::test]
async fn unresolved_route_renders_placeholder_only() {
    let templates = PageTemplates::load(None).unwrap();
    let pending: Remote<PostDetail> = Remote::Loading;

    let rendered = templates.render_post_state(&pending).unwrap();
    assert!(rendered.as_str().contains(LOADING_LABEL));
    assert!(!rendered.as_str().contains("<section"));
    assert!(!rendered.as_str().contains("banner"));
}
