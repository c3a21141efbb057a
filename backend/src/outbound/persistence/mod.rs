//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`.
//!
//! ```ignore
//! use anime_backend::outbound::persistence::{DbPool, DieselAnimeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/anime")).await?;
//! let repo = DieselAnimeRepository::new(pool);
//! ```

mod diesel_anime_repository;
mod diesel_basic_error_mapping;
mod diesel_credential_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_anime_repository::DieselAnimeRepository;
pub use diesel_credential_repository::DieselCredentialRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
