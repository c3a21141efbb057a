//! Builders wiring repositories into the services behind [`HttpState`].

use std::sync::Arc;

use anime_backend::domain::ports::{AnimeRepository, CredentialRepository};
use anime_backend::domain::{AccountSpec, AnimeService, AuthenticationService, Error};
use anime_backend::inbound::http::state::{HttpState, HttpStatePorts};
use anime_backend::outbound::memory::{InMemoryAnimeRepository, InMemoryCredentialRepository};
use anime_backend::outbound::persistence::{DieselAnimeRepository, DieselCredentialRepository};
use tracing::{info, warn};

use super::ServerConfig;

/// Build services over the given repositories and provision the bootstrap
/// account, if any.
async fn assemble<R, C>(
    animes: Arc<R>,
    credentials: Arc<C>,
    bootstrap_account: Option<&AccountSpec>,
    max_page_size: u32,
) -> Result<HttpState, Error>
where
    R: AnimeRepository + 'static,
    C: CredentialRepository + 'static,
{
    let anime_service = Arc::new(AnimeService::new(animes));
    let authentication = Arc::new(AuthenticationService::new(credentials));
    match bootstrap_account {
        Some(account) => authentication.provision(account).await?,
        None => warn!("no bootstrap credential configured; only existing accounts can sign in"),
    }
    Ok(HttpState::new(HttpStatePorts {
        animes: anime_service.clone(),
        animes_command: anime_service,
        authenticator: authentication,
    })
    .with_max_page_size(max_page_size))
}

/// Build the shared HTTP state, choosing PostgreSQL adapters when a pool is
/// configured and in-memory adapters otherwise.
pub(crate) async fn build_http_state(config: &ServerConfig) -> Result<HttpState, Error> {
    let bootstrap = config.bootstrap_account.as_ref();
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            assemble(
                Arc::new(DieselAnimeRepository::new(pool.clone())),
                Arc::new(DieselCredentialRepository::new(pool.clone())),
                bootstrap,
                config.max_page_size,
            )
            .await
        }
        None => {
            info!("no database configured; using in-memory repositories");
            assemble(
                Arc::new(InMemoryAnimeRepository::new()),
                Arc::new(InMemoryCredentialRepository::new()),
                bootstrap,
                config.max_page_size,
            )
            .await
        }
    }
}
