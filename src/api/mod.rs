// src/api/mod.rs
//! Prismic API interaction — the ability to retrieve content from a
//! repository.
//!
//! This module provides a data-oriented interface to the Prismic API,
//! with clear separation between I/O operations, parsing, and business
//! logic.

pub mod client;
pub mod pagination;
pub mod parser;
pub mod responses;

use crate::constants::LISTING_PAGE_SIZE;
use crate::error::AppError;
use crate::types::{DocumentType, DocumentUid};
use responses::{RawDocument, SearchResponse};

/// One page of a typed document query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u32,
    pub page: u32,
}

impl PageRequest {
    /// The first page at a given page size.
    pub fn first(page_size: u32) -> Self {
        Self { page_size, page: 1 }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(LISTING_PAGE_SIZE)
    }
}

/// The ability to retrieve content from a Prismic repository.
///
/// This is the fundamental seam for API interaction: both page flows
/// depend on this trait, never on HTTP details, and tests substitute an
/// in-memory implementation. The instance is constructed once at process
/// start and passed into each flow's entry point.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch one page of documents of a custom type.
    async fn fetch_by_type(
        &self,
        doc_type: &DocumentType,
        request: &PageRequest,
    ) -> Result<SearchResponse, AppError>;

    /// Fetch the single document of a type carrying the given UID.
    async fn fetch_by_uid(
        &self,
        doc_type: &DocumentType,
        uid: &DocumentUid,
    ) -> Result<RawDocument, AppError>;

    /// Follow an opaque `next_page` URL exactly as the API supplied it.
    async fn fetch_page_url(&self, next_page: &str) -> Result<SearchResponse, AppError>;
}

// Re-export the public interface
pub use client::PrismicHttpClient;
pub use pagination::{enumerate_document_uids, EnumeratedRoutes};
