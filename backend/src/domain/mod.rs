//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed anime and authentication entities used by
//! the HTTP and persistence adapters, and the services that implement the
//! driving ports on top of driven ports.
//!
//! Public surface:
//! - Error / ErrorCode / FieldViolation: transport-agnostic failures.
//! - Anime, AnimeId, AnimeName, NewAnime: catalogue records.
//! - AnimeInsert, AnimeUpdate: validated request shapes.
//! - AnimeService, AuthenticationService: driving port implementations.

pub mod anime;
pub mod anime_service;
pub mod auth;
pub mod authentication_service;
pub mod error;
pub mod mapper;
pub mod password;
pub mod ports;

pub use self::anime::{
    ANIME_SORTABLE_PROPERTIES, Anime, AnimeId, AnimeInsert, AnimeName, AnimeUpdate,
    AnimeValidationError, NewAnime,
};
pub use self::anime_service::{ANIME_NOT_FOUND, AnimeService};
pub use self::auth::{
    Authority, BasicCredentials, Credential, CredentialsValidationError, Principal,
};
pub use self::authentication_service::{AccountSpec, AuthenticationService};
pub use self::error::{Error, ErrorCode, FieldViolation, VALIDATION_MESSAGE};
