//! HTTP server configuration object.

use std::net::SocketAddr;

use anime_backend::domain::AccountSpec;
use anime_backend::outbound::persistence::DbPool;
use pagination::DEFAULT_MAX_PAGE_SIZE;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) max_page_size: u32,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) bootstrap_account: Option<AccountSpec>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            db_pool: None,
            bootstrap_account: None,
        }
    }

    /// Use PostgreSQL-backed repositories instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Cap the `size` paging parameter.
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: u32) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Provision `account` before the server starts accepting requests.
    #[must_use]
    pub fn with_bootstrap_account(mut self, account: Option<AccountSpec>) -> Self {
        self.bootstrap_account = account;
        self
    }
}
