//! Driving port for anime mutations.

use async_trait::async_trait;

use crate::domain::{Anime, AnimeId, AnimeInsert, AnimeUpdate, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeCommand: Send + Sync {
    /// Persist a new anime and return it with its assigned id.
    async fn create(&self, request: AnimeInsert) -> Result<Anime, Error>;

    /// Overwrite an existing anime. Unknown ids fail with `NotFound`.
    async fn replace(&self, request: AnimeUpdate) -> Result<(), Error>;

    /// Remove an existing anime. Unknown ids fail with `NotFound`.
    async fn delete(&self, id: AnimeId) -> Result<(), Error>;
}
