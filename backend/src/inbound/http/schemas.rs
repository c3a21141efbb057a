//! OpenAPI schema definitions for generic wire types.
//!
//! `pagination::Page` is generic and framework-agnostic, so the anime page
//! envelope is described here for utoipa instead of deriving `ToSchema` on
//! the pagination crate.

use utoipa::ToSchema;

use crate::inbound::http::animes::AnimeBody;

/// OpenAPI schema for `pagination::Page<AnimeBody>`.
#[derive(ToSchema)]
#[schema(as = AnimePage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AnimePageSchema {
    /// Anime on this page.
    content: Vec<AnimeBody>,
    /// Zero-based page number.
    #[schema(example = 0)]
    number: u32,
    /// Requested page size.
    #[schema(example = 20)]
    size: u32,
    /// Number of anime across all pages.
    #[schema(example = 42)]
    total_elements: u64,
    /// Number of pages needed to hold every anime.
    #[schema(example = 3)]
    total_pages: u64,
    /// Number of anime on this page.
    #[schema(example = 20)]
    number_of_elements: u64,
    /// Whether this is the first page.
    first: bool,
    /// Whether no page follows this one.
    last: bool,
    /// Whether this page holds no anime.
    empty: bool,
}
