//! Process-local `AnimeRepository`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Direction, Page, PageRequest};

use crate::domain::ports::{AnimeRepository, AnimeRepositoryError};
use crate::domain::{Anime, AnimeId, NewAnime};

/// Anime records held in a `BTreeMap` keyed by id.
///
/// Identifiers start at 1 and are never reused, even after deletes.
#[derive(Debug)]
pub struct InMemoryAnimeRepository {
    records: Mutex<BTreeMap<AnimeId, Anime>>,
    next_id: AtomicI64,
}

impl Default for InMemoryAnimeRepository {
    fn default() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryAnimeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<AnimeId, Anime>>, AnimeRepositoryError> {
        self.records
            .lock()
            .map_err(|_| AnimeRepositoryError::query("anime store lock poisoned"))
    }
}

/// Names compare by bytes, matching the `"C"` collation of `animes.name`.
fn compare(request: &PageRequest, left: &Anime, right: &Anime) -> Ordering {
    let by_id = left.id().cmp(&right.id());
    let Some(order) = request.sort() else {
        return by_id;
    };
    match (order.property(), order.direction()) {
        ("name", Direction::Asc) => left.name().cmp(right.name()).then(by_id),
        ("name", Direction::Desc) => right.name().cmp(left.name()).then(by_id),
        (_, Direction::Desc) => by_id.reverse(),
        (_, Direction::Asc) => by_id,
    }
}

#[async_trait]
impl AnimeRepository for InMemoryAnimeRepository {
    async fn find_all(&self) -> Result<Vec<Anime>, AnimeRepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Anime>, AnimeRepositoryError> {
        let mut all: Vec<Anime> = self.lock()?.values().cloned().collect();
        all.sort_by(|left, right| compare(request, left, right));
        let total = all.len() as u64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = all.into_iter().skip(skip).take(size).collect();
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: &AnimeId) -> Result<Option<Anime>, AnimeRepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Anime>, AnimeRepositoryError> {
        Ok(self
            .lock()?
            .values()
            .filter(|anime| anime.name().as_ref().contains(fragment))
            .cloned()
            .collect())
    }

    async fn insert(&self, anime: &NewAnime) -> Result<Anime, AnimeRepositoryError> {
        let mut records = self.lock()?;
        let id = AnimeId::new(self.next_id.fetch_add(1, AtomicOrdering::SeqCst));
        let record = Anime::new(id, anime.name().clone());
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn save(&self, anime: &Anime) -> Result<(), AnimeRepositoryError> {
        let mut records = self.lock()?;
        self.next_id
            .fetch_max(anime.id().get().saturating_add(1), AtomicOrdering::SeqCst);
        records.insert(anime.id(), anime.clone());
        Ok(())
    }

    async fn delete(&self, id: &AnimeId) -> Result<(), AnimeRepositoryError> {
        self.lock()?.remove(id);
        Ok(())
    }
}
