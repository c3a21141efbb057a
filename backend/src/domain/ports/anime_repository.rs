//! Port abstraction for anime persistence adapters and their errors.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Anime, AnimeId, NewAnime};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by anime repository adapters.
    pub enum AnimeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "anime repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "anime repository query failed: {message}",
    }
}

/// Storage for anime records.
///
/// Identifiers are assigned by the adapter on [`insert`](Self::insert) and
/// never reused while the store is alive.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Every stored record, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Anime>, AnimeRepositoryError>;

    /// One window of records plus the total count.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Anime>, AnimeRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &AnimeId) -> Result<Option<Anime>, AnimeRepositoryError>;

    /// Records whose name contains `fragment`, ordered by ascending id.
    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Anime>, AnimeRepositoryError>;

    /// Store a new record under a freshly assigned identifier.
    async fn insert(&self, anime: &NewAnime) -> Result<Anime, AnimeRepositoryError>;

    /// Insert or overwrite the record with the same identifier.
    async fn save(&self, anime: &Anime) -> Result<(), AnimeRepositoryError>;

    /// Remove a record. Deleting an unknown id is not an error.
    async fn delete(&self, id: &AnimeId) -> Result<(), AnimeRepositoryError>;
}
