//! Driving port for read-only anime use-cases.
//!
//! HTTP handlers depend on this trait rather than on a repository so they
//! can be exercised against a mock without wiring persistence.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Anime, AnimeId, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeQuery: Send + Sync {
    /// One page of anime in the requested order.
    async fn list_page(&self, request: &PageRequest) -> Result<Page<Anime>, Error>;

    /// Every anime, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Anime>, Error>;

    /// Fetch one anime, failing with [`crate::domain::ErrorCode::NotFound`]
    /// when the id is unknown.
    async fn find_by_id(&self, id: AnimeId) -> Result<Anime, Error>;

    /// Anime whose name contains `fragment`. An empty result is not an error.
    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Anime>, Error>;
}
