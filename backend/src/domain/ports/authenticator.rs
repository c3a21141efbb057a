//! Driving port for HTTP Basic authentication.
//!
//! Inbound adapters call it to turn presented credentials into a
//! [`Principal`] without knowing where credentials are stored.

use async_trait::async_trait;

use crate::domain::{BasicCredentials, Error, Principal};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify `credentials` and return the authenticated principal.
    async fn authenticate(&self, credentials: &BasicCredentials) -> Result<Principal, Error>;
}
