// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the site
//! build: fetch → compose → deliver.
//!
//! Each trait describes a single capability, enabling testing each
//! stage in isolation.

use crate::error::AppError;
use crate::model::PostDetail;
use crate::output::{OutputReport, Route};
use crate::types::{DocumentUid, RenderedPage};
use crate::view::{ListingState, Remote};

/// Everything fetched from the content repository for one build.
#[derive(Debug, Clone)]
pub struct SiteContent {
    /// Listing state after the initial load plus any eager load-mores.
    pub listing: ListingState,
    /// One entry per enumerated route, in API order.
    pub posts: Vec<PostEntry>,
}

/// A detail route with its resolution state.
#[derive(Debug, Clone)]
pub struct PostEntry {
    pub uid: DocumentUid,
    pub detail: Remote<PostDetail>,
}

/// A rendered page bound to the route it serves.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub route: Route,
    pub page: RenderedPage,
}

/// Retrieves all site content from the configured repository.
#[async_trait::async_trait]
pub trait SiteSource {
    async fn fetch(&self) -> Result<SiteContent, AppError>;
}

/// Transforms fetched content into rendered pages.
pub trait PageComposer {
    fn compose(&self, content: &SiteContent) -> Result<Vec<ComposedPage>, AppError>;
}

/// Delivers rendered pages to their destinations.
pub trait SiteDelivery {
    fn deliver(&self, pages: Vec<ComposedPage>) -> Result<OutputReport, AppError>;
}
