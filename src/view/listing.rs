// src/view/listing.rs
//! Pagination state of the post listing.
//!
//! The state accumulates normalized posts in API order and tracks the
//! opaque `next_page` cursor. Two invariants hold across any sequence of
//! operations: `items` is append-only (any earlier state's items are a
//! prefix of any later state's), and `next_page` is null exactly when
//! the API has signalled the end of pagination — once null, the
//! load-more affordance is hidden for good.
//!
//! A generation counter guards the asynchronous gap of a load-more: a
//! ticket minted before the fetch must still match the state's
//! generation when the result lands, otherwise the result belongs to a
//! torn-down view and is dropped without touching state.

use crate::api::responses::SearchResponse;
use crate::api::ContentRepository;
use crate::error::AppError;
use crate::model::PostSummary;

/// Identity of one view instance's fetch epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// Permission to run one load-more against a specific state generation.
#[derive(Debug, Clone)]
pub struct LoadMoreTicket {
    url: String,
    generation: FetchGeneration,
}

impl LoadMoreTicket {
    /// The opaque next-page URL to fetch, exactly as the API supplied it.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Accumulated listing state: posts shown so far plus the cursor.
#[derive(Debug, Clone)]
pub struct ListingState {
    items: Vec<PostSummary>,
    next_page: Option<String>,
    generation: FetchGeneration,
}

impl ListingState {
    /// Builds the initial state from the first page of results.
    pub fn from_page(page: &SearchResponse) -> Self {
        Self {
            items: normalize(page),
            next_page: page.next_page.clone(),
            generation: FetchGeneration(0),
        }
    }

    /// Posts in insertion order (API order, append-only).
    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    /// The opaque cursor, if the API has signalled more pages.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Whether the load-more affordance should render.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Mints a ticket for one load-more, or `None` when pagination has
    /// ended — in which case the operation is a no-op by contract.
    pub fn begin_load_more(&self) -> Option<LoadMoreTicket> {
        self.next_page.as_ref().map(|url| LoadMoreTicket {
            url: url.clone(),
            generation: self.generation,
        })
    }

    /// Applies a fetched page to the state.
    ///
    /// Returns `false` and leaves the state untouched when the ticket's
    /// generation is stale. Otherwise appends the page's posts in order
    /// (no dedup, no sort) and replaces the cursor with the response's,
    /// which may be null and thereby end pagination permanently.
    pub fn apply_page(&mut self, ticket: &LoadMoreTicket, page: &SearchResponse) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale load-more result for generation {:?} (state is at {:?})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.items.extend(normalize(page));
        self.next_page = page.next_page.clone();
        true
    }

    /// Marks the current view instance as gone. Pending tickets minted
    /// before this call no longer apply.
    #[allow(dead_code)] // Used when a view is torn down mid-fetch
    pub fn invalidate(&mut self) {
        self.generation = FetchGeneration(self.generation.0 + 1);
    }
}

/// Runs one load-more against the repository.
///
/// With a null cursor this returns `Ok(false)` without issuing any
/// network call or changing state. A stale result (the state was
/// invalidated mid-flight) is also reported as `Ok(false)`.
pub async fn load_more(
    repository: &dyn ContentRepository,
    state: &mut ListingState,
) -> Result<bool, AppError> {
    let Some(ticket) = state.begin_load_more() else {
        return Ok(false);
    };

    let page = repository.fetch_page_url(ticket.url()).await?;
    Ok(state.apply_page(&ticket, &page))
}

fn normalize(page: &SearchResponse) -> Vec<PostSummary> {
    page.results.iter().map(PostSummary::from_document).collect()
}
