//! Credential verification and account provisioning.

use std::collections::BTreeSet;
use std::sync::Arc;

use argon2::Params;
use async_trait::async_trait;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::password::{decoy_hash, hash_off_executor, verify_off_executor};
use crate::domain::ports::{Authenticator, CredentialRepository, CredentialRepositoryError};
use crate::domain::{Authority, BasicCredentials, Credential, Error, Principal};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Authenticator backed by a credential repository.
#[derive(Clone)]
pub struct AuthenticationService<C> {
    credentials: Arc<C>,
    hash_params: Params,
    decoy_hash: String,
}

impl<C> AuthenticationService<C> {
    /// Create a service hashing new passwords with the default Argon2 cost.
    pub fn new(credentials: Arc<C>) -> Self {
        Self::with_hash_params(credentials, Params::default())
    }

    /// Create a service hashing new passwords with explicit Argon2 cost.
    pub fn with_hash_params(credentials: Arc<C>, hash_params: Params) -> Self {
        Self {
            credentials,
            decoy_hash: decoy_hash(&hash_params),
            hash_params,
        }
    }
}

fn map_repository_error(error: CredentialRepositoryError) -> Error {
    match error {
        CredentialRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("credential repository unavailable: {message}"))
        }
        CredentialRepositoryError::Query { message } => {
            Error::internal(format!("credential repository error: {message}"))
        }
    }
}

/// An account to create or refresh on start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: String,
    pub username: String,
    pub password: String,
    pub authorities: BTreeSet<Authority>,
}

impl<C> AuthenticationService<C>
where
    C: CredentialRepository,
{
    /// Hash the account password and store the credential, replacing any
    /// existing one with the same username.
    pub async fn provision(&self, account: &AccountSpec) -> Result<(), Error> {
        let password_hash = hash_off_executor(
            Zeroizing::new(account.password.clone()),
            self.hash_params.clone(),
        )
        .await
        .map_err(|err| Error::internal(err.to_string()))?;
        let credential = Credential {
            name: account.name.clone(),
            username: account.username.clone(),
            password_hash,
            authorities: account.authorities.clone(),
        };
        self.credentials
            .save(&credential)
            .await
            .map_err(map_repository_error)?;
        info!(
            username = %credential.username,
            authorities = %Authority::join(&credential.authorities),
            "credential provisioned"
        );
        Ok(())
    }
}

#[async_trait]
impl<C> Authenticator for AuthenticationService<C>
where
    C: CredentialRepository,
{
    async fn authenticate(&self, credentials: &BasicCredentials) -> Result<Principal, Error> {
        let password = Zeroizing::new(credentials.password().to_owned());
        let Some(stored) = self
            .credentials
            .find_by_username(credentials.username())
            .await
            .map_err(map_repository_error)?
        else {
            // Spend the same hashing effort as a mismatch before rejecting.
            let _ = verify_off_executor(password, self.decoy_hash.clone()).await;
            debug!(username = credentials.username(), "unknown username");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = verify_off_executor(password, stored.password_hash)
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        if !matches {
            debug!(username = credentials.username(), "password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        Ok(Principal::new(stored.username, stored.authorities))
    }
}
