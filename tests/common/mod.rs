#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};
use mockall::mock;
use recruitment_client::config::Config;
use recruitment_client::session::{MemorySessionStore, Navigator};
use recruitment_client::ApiServices;
use serde_json::{json, Value as JsonValue};
use wiremock::MockServer;

mock! {
    pub Router {}

    impl Navigator for Router {
        fn navigate(&self, route: &str);
    }
}

pub struct TestApp {
    pub server: MockServer,
    pub api: ApiServices,
    pub store: Arc<MemorySessionStore>,
}

/// Services pointed at a fresh mock server, backed by an in-memory session.
pub async fn spawn_app(router: MockRouter) -> TestApp {
    spawn_app_with(Arc::new(router)).await
}

pub async fn spawn_app_with(navigator: Arc<dyn Navigator>) -> TestApp {
    let server = MockServer::start().await;
    let config = Config::with_base_url(&server.uri()).expect("config");
    let store = Arc::new(MemorySessionStore::new());
    let api = ApiServices::new(&config, store.clone(), navigator).expect("services");
    TestApp { server, api, store }
}

/// Router that must never be navigated.
pub fn idle_router() -> MockRouter {
    let mut router = MockRouter::new();
    router.expect_navigate().never();
    router
}

/// Router expecting exactly one navigation to `route`.
pub fn router_expecting(route: &'static str) -> MockRouter {
    let mut router = MockRouter::new();
    router
        .expect_navigate()
        .withf(move |r: &str| r == route)
        .times(1)
        .return_const(());
    router
}

pub fn sign_token(claims: JsonValue) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test_secret_key"),
    )
    .expect("sign token")
}

pub fn stage_json(id: &str, name: &str, stage_type: &str, order: i32) -> JsonValue {
    json!({
        "id": id,
        "nome": name,
        "descricao": null,
        "tipo": stage_type,
        "ordem": order,
    })
}

pub fn process_json(id: &str, current_stage_id: &str) -> JsonValue {
    json!({
        "id": id,
        "candidaturaId": "5f1d8a0c-7a3b-4c55-9a0e-2f3c4d5e6f70",
        "etapaAtualId": current_stage_id,
        "dataInicio": "2024-03-01T10:00:00",
        "dataFim": null,
        "dataUltimaMudanca": "2024-03-04T15:30:00Z",
    })
}
