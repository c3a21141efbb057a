//! Port abstraction for credential storage.

use async_trait::async_trait;

use crate::domain::Credential;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by credential repository adapters.
    pub enum CredentialRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "credential repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "credential repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Look up the credential registered for `username`.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, CredentialRepositoryError>;

    /// Insert a credential or replace the one with the same username.
    async fn save(&self, credential: &Credential) -> Result<(), CredentialRepositoryError>;
}
