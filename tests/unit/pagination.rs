// tests/unit/pagination.rs
//! Unit tests for listing pagination state

use pretty_assertions::assert_eq;
use prismic2site::{ListingState, SearchResponse};
use serde_json::json;

/// Builds a search page carrying one result per UID
fn search_page(uids: &[&str], next_page: Option<&str>) -> SearchResponse {
    let results = uids
        .iter()
        .map(|uid| {
            json!({
                "id": format!("id-{}", uid),
                "uid": uid,
                "type": "posts",
                "first_publication_date": "2021-03-15T19:25:28+0000",
                "data": {
                    "title": format!("Post {}", uid),
                    "subtitle": "sub",
                    "author": "Autora"
                }
            })
        })
        .collect::<Vec<_>>();

    serde_json::from_value(json!({
        "page": 1,
        "results_per_page": uids.len(),
        "results_size": uids.len(),
        "total_results_size": uids.len(),
        "total_pages": 1,
        "next_page": next_page,
        "results": results
    }))
    .unwrap()
}

fn uids_of(state: &ListingState) -> Vec<String> {
    state
        .items()
        .iter()
        .map(|post| post.uid.clone().unwrap())
        .collect()
}

#[test]
fn six_plus_two_scenario() {
    // initial load: six posts and a next page
    let first_page = search_page(&["a", "b", "c", "d", "e", "f"], Some("url2"));
    let mut state = ListingState::from_page(&first_page);
    assert_eq!(state.items().len(), 6);
    assert!(state.has_more());

    // load more: two posts, pagination ends
    let ticket = state.begin_load_more().unwrap();
    assert_eq!(ticket.url(), "url2");
    assert!(state.apply_page(&ticket, &search_page(&["g", "h"], None)));

    assert_eq!(uids_of(&state), ["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert!(!state.has_more());
}

#[test]
fn every_state_is_a_prefix_of_its_successor() {
    let mut state = ListingState::from_page(&search_page(&["a"], Some("u2")));
    let mut snapshots = vec![uids_of(&state)];

    for (uid, next) in [("b", Some("u3")), ("c", Some("u4")), ("d", None)] {
        let ticket = state.begin_load_more().unwrap();
        state.apply_page(&ticket, &search_page(&[uid], next));
        snapshots.push(uids_of(&state));
    }

    for window in snapshots.windows(2) {
        let (earlier, later) = (&window[0], &window[1]);
        assert_eq!(&later[..earlier.len()], earlier.as_slice());
    }
}

#[test]
fn exhausted_state_mints_no_tickets() {
    let state = ListingState::from_page(&search_page(&["a"], None));
    assert!(!state.has_more());
    assert!(state.begin_load_more().is_none());
}

#[test]
fn invalidation_makes_pending_tickets_stale() {
    let mut state = ListingState::from_page(&search_page(&["a"], Some("u2")));
    let pending = state.begin_load_more().unwrap();

    state.invalidate();

    assert!(!state.apply_page(&pending, &search_page(&["b"], None)));
    assert_eq!(uids_of(&state), ["a"]);
    assert_eq!(state.next_page(), Some("u2"));

    // a ticket minted after invalidation applies normally
    let fresh = state.begin_load_more().unwrap();
    assert!(state.apply_page(&fresh, &search_page(&["b"], None)));
    assert_eq!(uids_of(&state), ["a", "b"]);
}
