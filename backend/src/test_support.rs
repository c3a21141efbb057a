//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`; only
//! compiled for tests or with the `test-support` feature.

use std::collections::BTreeSet;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use argon2::Params;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::Trace;
use crate::domain::{AccountSpec, AnimeService, AuthenticationService, Authority};
use crate::inbound::http::animes;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryAnimeRepository, InMemoryCredentialRepository};

/// Password shared by every fixture account.
pub const FIXTURE_PASSWORD: &str = "academy";
/// Fixture account holding only `ROLE_USER`.
pub const USER_USERNAME: &str = "devdojo";
/// Fixture account holding `ROLE_USER` and `ROLE_ADMIN`.
pub const ADMIN_USERNAME: &str = "ricardo";

/// Argon2 parameters cheap enough for test suites.
///
/// # Panics
/// Never in practice; the parameters are statically valid.
pub fn cheap_hash_params() -> Params {
    Params::new(8, 1, 1, None).expect("static argon2 params are valid")
}

/// `Authorization` header value for the given credentials.
///
/// # Examples
/// ```
/// use anime_backend::test_support::basic_auth_header;
///
/// assert_eq!(basic_auth_header("devdojo", "academy"), "Basic ZGV2ZG9qbzphY2FkZW15");
/// ```
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

fn fixture_accounts() -> [AccountSpec; 2] {
    [
        AccountSpec {
            name: "DevDojo Academy".to_owned(),
            username: USER_USERNAME.to_owned(),
            password: FIXTURE_PASSWORD.to_owned(),
            authorities: BTreeSet::from([Authority::User]),
        },
        AccountSpec {
            name: "Ricardo".to_owned(),
            username: ADMIN_USERNAME.to_owned(),
            password: FIXTURE_PASSWORD.to_owned(),
            authorities: BTreeSet::from([Authority::User, Authority::Admin]),
        },
    ]
}

/// HTTP state over empty in-memory repositories with both fixture accounts
/// provisioned.
///
/// # Panics
/// Panics if provisioning a fixture account fails.
pub async fn in_memory_state() -> HttpState {
    let animes = Arc::new(AnimeService::new(Arc::new(InMemoryAnimeRepository::new())));
    let authentication = Arc::new(AuthenticationService::with_hash_params(
        Arc::new(InMemoryCredentialRepository::new()),
        cheap_hash_params(),
    ));
    for account in fixture_accounts() {
        authentication
            .provision(&account)
            .await
            .expect("fixture account provisions");
    }
    HttpState::new(HttpStatePorts {
        animes: animes.clone(),
        animes_command: animes,
        authenticator: authentication,
    })
}

/// Application serving the anime routes over `state`, wrapped in the trace
/// middleware like the production server.
pub fn anime_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(animes::configure)
}
