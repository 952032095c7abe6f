// src/output/paths.rs
//! Pure functions mapping site routes to output paths.
//!
//! No I/O happens here. UIDs are validated slugs, so the produced paths
//! need no further sanitization.

use crate::constants::LOADING_FALLBACK_SEGMENT;
use crate::types::DocumentUid;
use std::path::{Path, PathBuf};

/// One addressable page of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the paginated post listing.
    Listing,
    /// `/post/{uid}` — a single post detail page.
    Post(DocumentUid),
    /// The placeholder page served while an on-demand route resolves.
    LoadingFallback,
}

impl Route {
    /// The URL path this route is served under.
    #[allow(dead_code)] // Public API - used by library consumers
    pub fn href(&self) -> String {
        match self {
            Self::Listing => "/".to_string(),
            Self::Post(uid) => format!("/post/{}", uid),
            Self::LoadingFallback => format!("/post/{}", LOADING_FALLBACK_SEGMENT),
        }
    }

    /// The file this route renders to, under the output directory.
    ///
    /// Every route lands on an `index.html` so a plain file server maps
    /// the URL path directly onto the directory tree.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        match self {
            Self::Listing => output_dir.join("index.html"),
            Self::Post(uid) => output_dir.join("post").join(uid.as_str()).join("index.html"),
            Self::LoadingFallback => output_dir
                .join("post")
                .join(LOADING_FALLBACK_SEGMENT)
                .join("index.html"),
        }
    }
}
