//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod anime_command;
mod anime_query;
mod anime_repository;
mod authenticator;
mod credential_repository;

#[cfg(test)]
pub use anime_command::MockAnimeCommand;
pub use anime_command::AnimeCommand;
#[cfg(test)]
pub use anime_query::MockAnimeQuery;
pub use anime_query::AnimeQuery;
#[cfg(test)]
pub use anime_repository::MockAnimeRepository;
pub use anime_repository::{AnimeRepository, AnimeRepositoryError};
#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::Authenticator;
#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{CredentialRepository, CredentialRepositoryError};
