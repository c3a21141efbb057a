//! PostgreSQL-backed `AnimeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Direction, Page, PageRequest};

use crate::domain::ports::{AnimeRepository, AnimeRepositoryError};
use crate::domain::{Anime, AnimeId, AnimeName, NewAnime};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AnimeRow, NewAnimeRow};
use super::pool::{DbPool, PoolError};
use super::schema::animes;

/// Diesel-backed implementation of the anime repository port.
#[derive(Clone)]
pub struct DieselAnimeRepository {
    pool: DbPool,
}

impl DieselAnimeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AnimeRepositoryError {
    map_basic_pool_error(error, AnimeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AnimeRepositoryError {
    map_basic_diesel_error(
        error,
        AnimeRepositoryError::query,
        AnimeRepositoryError::connection,
    )
}

fn row_to_anime(row: AnimeRow) -> Result<Anime, AnimeRepositoryError> {
    let name = AnimeName::new(row.name)
        .map_err(|err| AnimeRepositoryError::query(format!("anime {}: {err}", row.id)))?;
    Ok(Anime::new(AnimeId::new(row.id), name))
}

fn rows_to_animes(rows: Vec<AnimeRow>) -> Result<Vec<Anime>, AnimeRepositoryError> {
    rows.into_iter().map(row_to_anime).collect()
}

/// Escape `LIKE` metacharacters so the fragment matches literally.
///
/// PostgreSQL treats backslash as the default `LIKE` escape character.
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn to_i64(value: u64, what: &str) -> Result<i64, AnimeRepositoryError> {
    i64::try_from(value).map_err(|_| AnimeRepositoryError::query(format!("{what} out of range")))
}

#[async_trait]
impl AnimeRepository for DieselAnimeRepository {
    async fn find_all(&self) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AnimeRow> = animes::table
            .select(AnimeRow::as_select())
            .order_by(animes::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_animes(rows)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Anime>, AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = animes::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let mut query = animes::table.select(AnimeRow::as_select()).into_boxed();
        query = match request.sort().map(|order| (order.property(), order.direction())) {
            Some(("name", Direction::Asc)) => query
                .order_by(animes::name.asc())
                .then_order_by(animes::id.asc()),
            Some(("name", Direction::Desc)) => query
                .order_by(animes::name.desc())
                .then_order_by(animes::id.asc()),
            Some((_, Direction::Desc)) => query.order_by(animes::id.desc()),
            Some((_, Direction::Asc)) | None => query.order_by(animes::id.asc()),
        };
        let rows: Vec<AnimeRow> = query
            .limit(i64::from(request.size()))
            .offset(to_i64(request.offset(), "page offset")?)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let total = u64::try_from(total)
            .map_err(|_| AnimeRepositoryError::query("negative row count"))?;
        Ok(Page::new(rows_to_animes(rows)?, request, total))
    }

    async fn find_by_id(&self, id: &AnimeId) -> Result<Option<Anime>, AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AnimeRow> = animes::table
            .find(id.get())
            .select(AnimeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_anime).transpose()
    }

    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AnimeRow> = animes::table
            .filter(animes::name.like(like_pattern(fragment)))
            .select(AnimeRow::as_select())
            .order_by(animes::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_animes(rows)
    }

    async fn insert(&self, anime: &NewAnime) -> Result<Anime, AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: AnimeRow = diesel::insert_into(animes::table)
            .values(&NewAnimeRow {
                name: anime.name().as_ref(),
            })
            .returning(AnimeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_anime(row)
    }

    async fn save(&self, anime: &Anime) -> Result<(), AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(animes::table.find(anime.id().get()))
            .set(animes::name.eq(anime.name().as_ref()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated > 0 {
            return Ok(());
        }

        diesel::insert_into(animes::table)
            .values(&AnimeRow {
                id: anime.id().get(),
                name: anime.name().to_string(),
            })
            .on_conflict(animes::id)
            .do_update()
            .set(animes::name.eq(anime.name().as_ref()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        // Explicit ids bypass the sequence; keep it ahead of them.
        diesel::sql_query(
            "SELECT setval(pg_get_serial_sequence('animes', 'id'), \
             GREATEST((SELECT MAX(id) FROM animes), 1))",
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: &AnimeId) -> Result<(), AnimeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(animes::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
