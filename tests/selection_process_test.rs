mod common;

use common::{idle_router, process_json, spawn_app};
use recruitment_client::error::Error;
use recruitment_client::models::selection_process::HistoryAction;
use recruitment_client::session::SessionStore;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const PROCESS_ID: &str = "0c9a5b1e-3f2d-4e6a-8b7c-9d0e1f2a3b4c";

fn process_id() -> Uuid {
    Uuid::parse_str(PROCESS_ID).expect("uuid")
}

#[tokio::test]
async fn reject_sends_feedback_verbatim() {
    let app = spawn_app(idle_router()).await;
    app.store.set_tokens("T1", "R1").expect("set tokens");

    Mock::given(method("POST"))
        .and(path(format!("/processos-seletivos/{}/reprovar", PROCESS_ID)))
        .and(header("Authorization", "Bearer T1"))
        .and(body_json(json!({ "feedback": "Não atendeu aos requisitos técnicos" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(process_json(PROCESS_ID, "etapa-2")))
        .expect(1)
        .mount(&app.server)
        .await;

    let process = app
        .api
        .selection_processes
        .reject(process_id(), "Não atendeu aos requisitos técnicos")
        .await
        .expect("reject");

    assert_eq!(process.id, process_id());
    assert!(!process.is_closed());
}

#[tokio::test]
async fn reject_without_feedback_sends_nothing() {
    let app = spawn_app(idle_router()).await;

    let err = app
        .api
        .selection_processes
        .reject(process_id(), "   ")
        .await
        .expect_err("feedback is required");

    assert!(err.is_validation());
    assert!(app.server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn reject_of_unknown_process_surfaces_not_found() {
    let app = spawn_app(idle_router()).await;
    app.store.set_tokens("T1", "R1").expect("set tokens");

    Mock::given(method("POST"))
        .and(path(format!("/processos-seletivos/{}/reprovar", PROCESS_ID)))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Processo seletivo não encontrado" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app
        .api
        .selection_processes
        .reject(process_id(), "Perfil incompatível")
        .await
        .expect_err("not found");

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Processo seletivo não encontrado");
}

#[tokio::test]
async fn advance_without_feedback_sends_empty_object() {
    let app = spawn_app(idle_router()).await;

    Mock::given(method("POST"))
        .and(path(format!("/processos-seletivos/{}/avancar", PROCESS_ID)))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(process_json(PROCESS_ID, "etapa-3")))
        .expect(1)
        .mount(&app.server)
        .await;

    let process = app
        .api
        .selection_processes
        .advance(process_id(), None)
        .await
        .expect("advance");

    assert_eq!(process.current_stage_id, "etapa-3");
}

#[tokio::test]
async fn return_to_stage_names_the_target_stage() {
    let app = spawn_app(idle_router()).await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/processos-seletivos/{}/retornar-para-etapa",
            PROCESS_ID
        )))
        .and(body_json(json!({ "etapaId": "etapa-1", "feedback": "Rever entrevista" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(process_json(PROCESS_ID, "etapa-1")))
        .expect(1)
        .mount(&app.server)
        .await;

    let process = app
        .api
        .selection_processes
        .return_to_stage(process_id(), "etapa-1", Some("Rever entrevista".to_string()))
        .await
        .expect("return to stage");

    assert_eq!(process.current_stage_id, "etapa-1");
}

#[tokio::test]
async fn refused_transition_keeps_the_server_message() {
    let app = spawn_app(idle_router()).await;

    Mock::given(method("POST"))
        .and(path(format!("/processos-seletivos/{}/finalizar", PROCESS_ID)))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Processo já finalizado" })),
        )
        .mount(&app.server)
        .await;

    let err = app
        .api
        .selection_processes
        .finalize(process_id(), None)
        .await
        .expect_err("refused");

    assert!(matches!(err, Error::BadRequest(ref msg) if msg == "Processo já finalizado"));
}

#[tokio::test]
async fn history_is_returned_in_server_order() {
    let app = spawn_app(idle_router()).await;

    Mock::given(method("GET"))
        .and(path(format!("/processos-seletivos/{}/historico", PROCESS_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1b2c3d4e-5f60-4718-9a0b-1c2d3e4f5a6b",
                "etapaId": "etapa-2",
                "etapaNome": "Entrevista técnica",
                "acao": "AVANCOU",
                "feedback": "Bom desempenho",
                "dataMudanca": "2024-03-04T15:30:00"
            },
            {
                "id": "2c3d4e5f-6071-4829-8b1c-2d3e4f5a6b7c",
                "etapaId": "etapa-1",
                "acao": "INICIOU",
                "dataMudanca": "2024-03-01T10:00:00Z"
            }
        ])))
        .mount(&app.server)
        .await;

    let history = app
        .api
        .selection_processes
        .history(process_id())
        .await
        .expect("history");

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].stage_id, "etapa-2");
    assert_eq!(history[0].action, HistoryAction::Avancou);
    assert_eq!(history[1].action, HistoryAction::Iniciou);
    assert!(history[1].feedback.is_none());
}
