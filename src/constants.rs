// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the site is built: how many posts a listing page shows, how route
//! enumeration pages through the repository, what the fixed pieces of the
//! rendered pages say.

// ---------------------------------------------------------------------------
// Prismic API boundaries
// ---------------------------------------------------------------------------

/// How many posts the listing requests per page.
///
/// Matches the size of one "screen" of the listing; further pages are
/// reached through the API-supplied `next_page` URL.
pub const LISTING_PAGE_SIZE: u32 = 6;

/// How many documents route enumeration requests per page.
///
/// The Prismic API maximum is 100. Enumeration uses the maximum to
/// minimize round-trips when walking every post.
pub const ROUTE_ENUMERATION_PAGE_SIZE: u32 = 100;

/// Upper bound accepted for any page-size configuration.
pub const API_MAX_PAGE_SIZE: u32 = 100;

/// The custom type all blog posts are published under.
pub const POSTS_DOCUMENT_TYPE: &str = "posts";

// ---------------------------------------------------------------------------
// Rendered page fixtures
// ---------------------------------------------------------------------------

/// Title placed in the `<head>` of every rendered page.
pub const SITE_TITLE: &str = "Home | spacetraveling";

/// Label on the load-more control of the listing page.
pub const LOAD_MORE_LABEL: &str = "Carregar mais posts";

/// Text of the loading placeholder shown for not-yet-generated routes.
pub const LOADING_LABEL: &str = "Carregando...";

/// Fixed reading-time placeholder shown on every post page.
///
/// Not computed from content length.
pub const READING_TIME_PLACEHOLDER: &str = "4 min";

/// Directory segment under `post/` reserved for the fallback placeholder
/// page served while an on-demand route is being generated.
pub const LOADING_FALLBACK_SEGMENT: &str = "_loading";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters of HTML produced per rich-text block, used to
/// pre-allocate output strings. Over-estimating wastes a little memory;
/// under-estimating causes reallocation.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
