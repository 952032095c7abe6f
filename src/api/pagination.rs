// src/api/pagination.rs
//! Route enumeration: an explicit paging loop over a document type.
//!
//! Enumeration requests the first page at the API maximum page size and
//! then follows `next_page` URLs until the API returns null, so every
//! published document yields a route regardless of backend paging
//! defaults.

use super::{ContentRepository, PageRequest};
use crate::constants::ROUTE_ENUMERATION_PAGE_SIZE;
use crate::error::AppError;
use crate::types::{DocumentType, DocumentUid};

/// Result of walking every page of a document type.
#[derive(Debug, Clone)]
pub struct EnumeratedRoutes {
    /// UIDs in API order, across all pages.
    pub uids: Vec<DocumentUid>,
    /// How many pages the loop fetched.
    pub pages_fetched: u32,
}

/// Collects the UID of every document of a type.
///
/// Terminates exactly when a response carries a null `next_page`, or
/// earlier when `max_pages` caps the walk. Documents without a UID (or
/// with one that is not a valid slug) are skipped with a warning; they
/// cannot be routed.
pub async fn enumerate_document_uids(
    repository: &dyn ContentRepository,
    doc_type: &DocumentType,
    max_pages: Option<u32>,
) -> Result<EnumeratedRoutes, AppError> {
    let mut uids = Vec::new();
    let mut pages_fetched = 0u32;

    let mut response = repository
        .fetch_by_type(doc_type, &PageRequest::first(ROUTE_ENUMERATION_PAGE_SIZE))
        .await?;

    loop {
        pages_fetched += 1;
        collect_uids(&mut uids, &response.results);

        let next_page = response.next_page.clone();
        match next_page {
            None => break,
            Some(url) => {
                if let Some(max) = max_pages {
                    if pages_fetched >= max {
                        log::debug!("Reached maximum page limit: {}", max);
                        break;
                    }
                }
                response = repository.fetch_page_url(&url).await?;
            }
        }
    }

    log::info!(
        "Enumerated {} '{}' routes across {} page(s)",
        uids.len(),
        doc_type,
        pages_fetched
    );

    Ok(EnumeratedRoutes {
        uids,
        pages_fetched,
    })
}

fn collect_uids(uids: &mut Vec<DocumentUid>, results: &[super::responses::RawDocument]) {
    for document in results {
        match &document.uid {
            Some(raw) => match DocumentUid::parse(raw) {
                Ok(uid) => uids.push(uid),
                Err(e) => log::warn!("Skipping document {} with unroutable UID: {}", document.id, e),
            },
            None => log::warn!("Skipping document {} without a UID", document.id),
        }
    }
}
