//! In-memory repositories backed by mutex-guarded maps.

mod anime_repository;
mod credential_repository;

pub use anime_repository::InMemoryAnimeRepository;
pub use credential_repository::InMemoryCredentialRepository;
