//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use pagination::DEFAULT_MAX_PAGE_SIZE;

use crate::domain::ports::{AnimeCommand, AnimeQuery, Authenticator};

/// Parameter object bundling the port implementations handlers call.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub animes: Arc<dyn AnimeQuery>,
    pub animes_command: Arc<dyn AnimeCommand>,
    pub authenticator: Arc<dyn Authenticator>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub animes: Arc<dyn AnimeQuery>,
    pub animes_command: Arc<dyn AnimeCommand>,
    pub authenticator: Arc<dyn Authenticator>,
    pub max_page_size: u32,
}

impl HttpState {
    /// Build state with the default page size ceiling.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self {
            animes: ports.animes,
            animes_command: ports.animes_command,
            authenticator: ports.authenticator,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    /// Override the largest page size clients may request.
    pub fn with_max_page_size(mut self, max_page_size: u32) -> Self {
        self.max_page_size = max_page_size;
        self
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
