//! HTTP inbound adapter exposing the REST endpoints.

pub mod animes;
pub mod auth;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
