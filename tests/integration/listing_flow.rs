// tests/integration/listing_flow.rs
//! The listing flow end to end: initial load, load-more, rendering.

use super::support::{posts_type, search_page, InMemoryRepository};
use pretty_assertions::assert_eq;
use prismic2site::{
    load_more, ContentRepository, ListingState, PageRequest, PageTemplates, LOAD_MORE_LABEL,
};

#[tokio::test]
async fn initial_load_then_load_more_accumulates_in_api_order() {
    let mut repository = InMemoryRepository::default();
    repository.typed_pages = vec![search_page(
        &["a", "b", "c", "d", "e", "f"],
        Some("https://repo/api/v2/documents/search?page=2"),
    )];
    repository.pages_by_url.insert(
        "https://repo/api/v2/documents/search?page=2".to_string(),
        search_page(&["g", "h"], None),
    );

    // initial load: page 1, page size 6
    let first_page = repository
        .fetch_by_type(&posts_type(), &PageRequest::first(6))
        .await
        .unwrap();
    let mut listing = ListingState::from_page(&first_page);
    assert_eq!(listing.items().len(), 6);
    assert!(listing.has_more());

    // user-triggered load more follows the opaque URL
    assert!(load_more(&repository, &mut listing).await.unwrap());

    let uids: Vec<_> = listing
        .items()
        .iter()
        .map(|post| post.uid.clone().unwrap())
        .collect();
    assert_eq!(uids, ["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert!(!listing.has_more());
    assert_eq!(repository.request_count(), 2);
}

#[tokio::test]
async fn load_more_after_exhaustion_issues_no_request() {
    let mut repository = InMemoryRepository::default();
    repository.typed_pages = vec![search_page(&["a"], None)];

    let first_page = repository
        .fetch_by_type(&posts_type(), &PageRequest::first(6))
        .await
        .unwrap();
    let mut listing = ListingState::from_page(&first_page);
    let requests_before = repository.request_count();
    let items_before = listing.items().len();

    let loaded = load_more(&repository, &mut listing).await.unwrap();

    assert!(!loaded);
    assert_eq!(repository.request_count(), requests_before);
    assert_eq!(listing.items().len(), items_before);
}

#[tokio::test]
async fn rendered_listing_shows_load_more_only_while_pages_remain() {
    let mut repository = InMemoryRepository::default();
    repository.typed_pages = vec![search_page(&["a"], Some("https://repo/page2"))];
    repository
        .pages_by_url
        .insert("https://repo/page2".to_string(), search_page(&["b"], None));

    let first_page = repository
        .fetch_by_type(&posts_type(), &PageRequest::first(6))
        .await
        .unwrap();
    let mut listing = ListingState::from_page(&first_page);
    let templates = PageTemplates::load(None).unwrap();

    let rendered = templates.render_listing(&listing).unwrap();
    assert!(rendered.as_str().contains(LOAD_MORE_LABEL));
    assert!(rendered.as_str().contains("href=\"/post/a\""));

    load_more(&repository, &mut listing).await.unwrap();

    let rendered = templates.render_listing(&listing).unwrap();
    assert!(!rendered.as_str().contains(LOAD_MORE_LABEL));
    assert!(rendered.as_str().contains("href=\"/post/a\""));
    assert!(rendered.as_str().contains("href=\"/post/b\""));
}

#[tokio::test]
async fn listing_shows_formatted_date_and_author() {
    let mut repository = InMemoryRepository::default();
    repository.typed_pages = vec![search_page(&["a"], None)];

    let first_page = repository
        .fetch_by_type(&posts_type(), &PageRequest::first(6))
        .await
        .unwrap();
    let listing = ListingState::from_page(&first_page);
    let templates = PageTemplates::load(None).unwrap();

    let rendered = templates.render_listing(&listing).unwrap();
    assert!(rendered.as_str().contains("15 mar 2021"));
    assert!(rendered.as_str().contains("Autora"));
    assert!(rendered.as_str().contains("Subtítulo de a"));
}
