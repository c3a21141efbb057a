//! Anime catalogue service implementing the driving ports.
//!
//! Replace and delete are look-up-then-act: both fail with `NotFound` when
//! the id is unknown instead of silently creating or ignoring a record.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{AnimeCommand, AnimeQuery, AnimeRepository, AnimeRepositoryError};
use crate::domain::{Anime, AnimeId, AnimeInsert, AnimeUpdate, Error, NewAnime};

/// Message reported when an id-keyed lookup finds nothing.
pub const ANIME_NOT_FOUND: &str = "Anime not Found";

/// Anime service backed by a single repository.
#[derive(Clone)]
pub struct AnimeService<R> {
    repository: Arc<R>,
}

impl<R> AnimeService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: AnimeRepositoryError) -> Error {
    match error {
        AnimeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("anime repository unavailable: {message}"))
        }
        AnimeRepositoryError::Query { message } => {
            Error::internal(format!("anime repository error: {message}"))
        }
    }
}

impl<R> AnimeService<R>
where
    R: AnimeRepository,
{
    async fn require(&self, id: AnimeId) -> Result<Anime, Error> {
        self.repository
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(ANIME_NOT_FOUND))
    }
}

#[async_trait]
impl<R> AnimeQuery for AnimeService<R>
where
    R: AnimeRepository,
{
    async fn list_page(&self, request: &PageRequest) -> Result<Page<Anime>, Error> {
        self.repository
            .find_page(request)
            .await
            .map_err(map_repository_error)
    }

    async fn list_all(&self) -> Result<Vec<Anime>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_id(&self, id: AnimeId) -> Result<Anime, Error> {
        self.require(id).await
    }

    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Anime>, Error> {
        self.repository
            .find_by_name(fragment)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> AnimeCommand for AnimeService<R>
where
    R: AnimeRepository,
{
    async fn create(&self, request: AnimeInsert) -> Result<Anime, Error> {
        let record = NewAnime::from(request);
        let saved = self
            .repository
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        debug!(anime_id = %saved.id(), "anime created");
        Ok(saved)
    }

    async fn replace(&self, request: AnimeUpdate) -> Result<(), Error> {
        let existing = self.require(request.id).await?;
        let record = Anime::from(request).with_id(existing.id());
        self.repository
            .save(&record)
            .await
            .map_err(map_repository_error)?;
        debug!(anime_id = %record.id(), "anime replaced");
        Ok(())
    }

    async fn delete(&self, id: AnimeId) -> Result<(), Error> {
        let existing = self.require(id).await?;
        self.repository
            .delete(&existing.id())
            .await
            .map_err(map_repository_error)?;
        debug!(anime_id = %existing.id(), "anime deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "anime_service_tests.rs"]
mod tests;
