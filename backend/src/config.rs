//! Server settings loaded via OrthoConfig.
//!
//! Values come from `ANIME_*` environment variables, an optional
//! configuration file and command-line flags, in increasing precedence.

use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use pagination::DEFAULT_MAX_PAGE_SIZE;
use serde::Deserialize;

use crate::domain::{AccountSpec, Authority};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_BOOTSTRAP_NAME: &str = "Bootstrap administrator";
const DEFAULT_BOOTSTRAP_AUTHORITIES: &str = "ROLE_USER,ROLE_ADMIN";

/// Settings controlling how the server binds, stores data and seeds
/// credentials.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ANIME")]
pub struct AppSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL URL. Without it anime and credentials live in memory.
    pub database_url: Option<String>,
    /// Upper bound on the `size` paging parameter.
    #[ortho_config(default = 2000)]
    pub max_page_size: u32,
    /// Username provisioned at start-up.
    pub bootstrap_username: Option<String>,
    /// Password for the provisioned username.
    pub bootstrap_password: Option<String>,
    /// Comma-separated authorities for the provisioned username.
    pub bootstrap_authorities: Option<String>,
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Paging ceiling; zero falls back to the library default.
    pub fn max_page_size(&self) -> u32 {
        if self.max_page_size == 0 {
            DEFAULT_MAX_PAGE_SIZE
        } else {
            self.max_page_size
        }
    }

    /// Account to provision at start-up, present only when both a username
    /// and a password are configured.
    pub fn bootstrap_account(&self) -> Option<AccountSpec> {
        let username = self.bootstrap_username.as_deref()?.trim();
        let password = self.bootstrap_password.as_deref()?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        let authorities: BTreeSet<Authority> = Authority::parse_list(
            self.bootstrap_authorities
                .as_deref()
                .unwrap_or(DEFAULT_BOOTSTRAP_AUTHORITIES),
        );
        Some(AccountSpec {
            name: DEFAULT_BOOTSTRAP_NAME.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            authorities,
        })
    }
}
