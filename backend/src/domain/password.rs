//! Argon2 password hashing.
//!
//! Hashes are stored as PHC strings so the parameters travel with the hash
//! and verification works regardless of the cost the hash was created with.
//! Argon2 work blocks for tens of milliseconds; async callers go through
//! [`hash_off_executor`] and [`verify_off_executor`], which run the work on
//! Tokio's blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;
use zeroize::Zeroizing;

/// Base64 of a fixed 16-byte salt used only by [`decoy_hash`].
const DECOY_SALT: &str = "c29tZXNhbHRzb21lc2FsdA";
/// Base64 of a 32-byte all-zero digest used only by [`decoy_hash`].
const DECOY_DIGEST: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Failures raised while hashing or parsing a stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// The hasher rejected the input or parameters.
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// A stored hash is not a valid PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
    /// The blocking task running the hasher panicked or was cancelled.
    #[error("password hashing task failed: {0}")]
    Join(String),
}

/// Hash `password` with explicit Argon2id cost parameters.
pub fn hash_password_with_params(
    password: &str,
    params: Params,
) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordHashError::Hashing(err.to_string()))
}

/// Check `password` against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; only a malformed hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordHashError> {
    let parsed =
        PasswordHash::new(stored).map_err(|err| PasswordHashError::MalformedHash(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// [`hash_password_with_params`] on the blocking pool.
pub async fn hash_off_executor(
    password: Zeroizing<String>,
    params: Params,
) -> Result<String, PasswordHashError> {
    tokio::task::spawn_blocking(move || hash_password_with_params(&password, params))
        .await
        .map_err(|err| PasswordHashError::Join(err.to_string()))?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_off_executor(
    password: Zeroizing<String>,
    stored: String,
) -> Result<bool, PasswordHashError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|err| PasswordHashError::Join(err.to_string()))?
}

/// A well-formed Argon2id hash at the given cost that no password matches.
///
/// Verifying against it costs the same as verifying a real hash created
/// with `params`.
pub fn decoy_hash(params: &Params) -> String {
    format!(
        "$argon2id$v=19$m={},t={},p={}${DECOY_SALT}${DECOY_DIGEST}",
        params.m_cost(),
        params.t_cost(),
        params.p_cost(),
    )
}
