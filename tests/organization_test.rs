mod common;

use common::{idle_router, sign_token, spawn_app};
use recruitment_client::error::Error;
use recruitment_client::session::SessionStore;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn current_organization_follows_a_numeric_claim() {
    let app = spawn_app(idle_router()).await;
    let token = sign_token(json!({ "sub": "rh@acme.com", "organizacaoId": 42 }));
    app.store.set_tokens(&token, "R1").expect("set tokens");

    Mock::given(method("GET"))
        .and(path("/organizacoes/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "nome": "Acme",
            "cnpj": "12.345.678/0001-90"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let organization = app.api.organizations.current().await.expect("current organization");

    assert_eq!(organization.id, "42");
    assert_eq!(organization.name, "Acme");
}

#[tokio::test]
async fn current_organization_follows_a_uuid_claim() {
    let app = spawn_app(idle_router()).await;
    let org_id = "4c5d6e7f-8091-4a2b-9c3d-4e5f60718293";
    let token = sign_token(json!({ "sub": "rh@acme.com", "organizacaoId": org_id }));
    app.store.set_tokens(&token, "R1").expect("set tokens");

    Mock::given(method("GET"))
        .and(path(format!("/organizacoes/{}", org_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": org_id,
            "nome": "Acme"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let organization = app.api.organizations.current().await.expect("current organization");

    assert_eq!(organization.id, org_id);
}

#[tokio::test]
async fn current_organization_without_claim_is_forbidden() {
    let app = spawn_app(idle_router()).await;
    let token = sign_token(json!({ "sub": "candidato@mail.com" }));
    app.store.set_tokens(&token, "R1").expect("set tokens");

    let err = app
        .api
        .organizations
        .current()
        .await
        .expect_err("no organization");

    assert!(matches!(err, Error::Forbidden(_)));
    assert!(app.server.received_requests().await.unwrap_or_default().is_empty());
}
