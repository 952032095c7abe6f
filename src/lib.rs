// src/lib.rs
//! prismic2site library — builds a static blog site from a Prismic
//! content repository.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `SiteConfig`
//! - **Domain model** — `PostSummary`, `PostDetail`, `RichTextBlock`, etc.
//! - **Domain types** — `DocumentUid`, `DocumentType`, `ApiEndpoint`, etc.
//! - **API client** — `ContentRepository`, `PrismicHttpClient`, parsers
//! - **View state** — `ListingState`, `Remote`, `load_more`
//! - **Formatting** — `rich_text_to_html`, `format_publication_date`,
//!   `PageTemplates`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;
mod view;

// --- Error Handling ---
pub use crate::error::{AppError, PrismicErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Constants ---
pub use crate::constants::{
    LISTING_PAGE_SIZE, LOADING_LABEL, LOAD_MORE_LABEL, POSTS_DOCUMENT_TYPE,
    READING_TIME_PLACEHOLDER, ROUTE_ENUMERATION_PAGE_SIZE,
};

// --- Domain Model ---
pub use crate::model::{ContentSection, PostDetail, PostSummary};
pub use crate::model::rich_text::{
    EmbedBlock, HyperlinkData, ImageBlock, Oembed, RichTextBlock, Span, SpanKind, TextBlock,
};

// --- Domain Types ---
pub use crate::types::{
    AccessToken, ApiEndpoint, DocumentType, DocumentUid, RenderedPage, TemplateName,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    enumerate_document_uids,
    parser::{parse_repository_response, parse_search_response},
    responses::{RawDocument, Repository, RepositoryRef, SearchResponse},
    ContentRepository, EnumeratedRoutes, PageRequest, PrismicHttpClient,
};

// --- View State ---
pub use crate::view::{load_more, FetchGeneration, ListingState, LoadMoreTicket, Remote};

// --- Formatting ---
pub use crate::formatting::{format_publication_date, rich_text_to_html, PageTemplates};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport, Route};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    ComposedPage, PageComposer, PostEntry, SiteContent, SiteDelivery, SiteSource,
};
