//! Tests for the application bootstrap, covering state wiring and readiness
//! signalling.

use super::server::{ServerConfig, create_server};
use actix_web::web;
use anime_backend::domain::{AccountSpec, Authority};
use anime_backend::inbound::http::health::HealthState;
use rstest::{fixture, rstest};
use std::collections::BTreeSet;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"))
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), config)
        .await
        .expect("server should build with in-memory store");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_web::test]
async fn create_server_provisions_bootstrap_account(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    let config = config.with_bootstrap_account(Some(AccountSpec {
        name: "Ricardo".to_owned(),
        username: "ricardo".to_owned(),
        password: "academy".to_owned(),
        authorities: BTreeSet::from([Authority::User, Authority::Admin]),
    }));

    let _server = create_server(health_state.clone(), config)
        .await
        .expect("bootstrap credential should be provisioned");

    assert!(health_state.is_ready());
}
