mod common;

use common::{idle_router, spawn_app, stage_json};
use recruitment_client::editor::{StageDraft, StageEditError, StageEditor};
use recruitment_client::error::Error;
use recruitment_client::models::stage::{Stage, StageType};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn persisted(order: i32, name: &str, stage_type: StageType) -> Stage {
    Stage {
        id: Uuid::new_v4().to_string(),
        job_id: None,
        name: name.to_string(),
        description: None,
        stage_type,
        order,
        status: None,
    }
}

fn draft(name: &str, stage_type: StageType) -> StageDraft {
    StageDraft {
        name: name.to_string(),
        stage_type: Some(stage_type),
        description: None,
    }
}

#[tokio::test]
async fn load_sorts_stages_by_order() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stage_json("3f0e4c1a-0000-4000-8000-000000000003", "Proposta", "PROPOSTA_SALARIAL", 3),
            stage_json("3f0e4c1a-0000-4000-8000-000000000001", "Triagem", "TRIAGEM", 1),
            stage_json("3f0e4c1a-0000-4000-8000-000000000002", "Teste", "TESTE_TECNICO", 2),
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut editor = app.api.stage_editor(job_id);
    editor.load().await;

    let orders: Vec<i32> = editor.stages().iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(editor.stages()[0].stage_type, StageType::Triagem);
    assert_eq!(editor.pending().count(), 0);
}

#[tokio::test]
async fn failed_load_leaves_the_editor_empty() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut editor = StageEditor::with_stages(
        job_id,
        app.api.stages.clone(),
        vec![persisted(1, "Triagem", StageType::Triagem)],
    );
    editor.load().await;

    assert!(editor.stages().is_empty());

    let err = editor
        .add(draft("Entrevista", StageType::EntrevistaOnline))
        .expect_err("nothing to append to");
    assert!(matches!(err, Error::StageEdit(StageEditError::NotLoaded)));
    assert!(editor.stages().is_empty());
}

#[tokio::test]
async fn save_creates_only_unsaved_stages() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(stage_json(
            "9a8b7c6d-0000-4000-8000-00000000000a",
            "Criada",
            "OUTRA",
            4,
        )))
        .expect(2)
        .mount(&app.server)
        .await;

    let mut editor = StageEditor::with_stages(
        job_id,
        app.api.stages.clone(),
        vec![
            persisted(1, "Triagem", StageType::Triagem),
            persisted(2, "Entrevista", StageType::EntrevistaOnline),
        ],
    );
    editor.add(draft("Teste técnico", StageType::TesteTecnico)).expect("add");
    editor.add(draft("Proposta", StageType::PropostaSalarial)).expect("add");

    let report = editor.save().await;

    assert!(report.is_success());
    assert_eq!(report.created.len(), 2);
    assert!(report.notice().is_none());
}

#[tokio::test]
async fn new_stage_payload_carries_position_and_type() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .and(body_json(json!({
            "nome": "Dinâmica",
            "descricao": null,
            "tipo": "DINAMICA_GRUPO",
            "ordem": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stage_json(
            "9a8b7c6d-0000-4000-8000-00000000000b",
            "Dinâmica",
            "DINAMICA_GRUPO",
            2,
        )))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut editor = StageEditor::with_stages(
        job_id,
        app.api.stages.clone(),
        vec![persisted(1, "Triagem", StageType::Triagem)],
    );
    editor.add(draft("  Dinâmica ", StageType::DinamicaGrupo)).expect("add");

    let report = editor.save().await;
    assert!(report.is_success());
}

#[tokio::test]
async fn partial_failure_is_reported_and_keeps_the_list() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .and(body_partial_json(json!({ "nome": "Case" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Erro interno" })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(stage_json(
            "9a8b7c6d-0000-4000-8000-00000000000c",
            "Teste",
            "TESTE_TECNICO",
            2,
        )))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&app.server)
        .await;

    let mut editor = StageEditor::with_stages(
        job_id,
        app.api.stages.clone(),
        vec![persisted(1, "Triagem", StageType::Triagem)],
    );
    editor.add(draft("Teste", StageType::TesteTecnico)).expect("add");
    editor.add(draft("Case", StageType::Case)).expect("add");

    let report = editor.save_and_reload().await;

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "Case");
    assert_eq!(
        report.notice().as_deref(),
        Some("Failed to save 1 of 2 new stages. Please try again.")
    );
    assert_eq!(editor.stages().len(), 3);
    assert_eq!(editor.pending().count(), 2);
}

#[tokio::test]
async fn successful_save_reloads_from_the_server() {
    let app = spawn_app(idle_router()).await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(stage_json(
            "9a8b7c6d-0000-4000-8000-00000000000d",
            "Entrevista",
            "ENTREVISTA_PRESENCIAL",
            2,
        )))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/vagas/{}/etapas", job_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stage_json("9a8b7c6d-0000-4000-8000-00000000000d", "Entrevista", "ENTREVISTA_PRESENCIAL", 2),
            stage_json("9a8b7c6d-0000-4000-8000-000000000001", "Triagem", "TRIAGEM", 1),
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut editor = StageEditor::with_stages(
        job_id,
        app.api.stages.clone(),
        vec![persisted(1, "Triagem", StageType::Triagem)],
    );
    editor
        .add(draft("Entrevista", StageType::EntrevistaPresencial))
        .expect("add");

    let report = editor.save_and_reload().await;

    assert!(report.is_success());
    assert_eq!(editor.pending().count(), 0);
    assert_eq!(editor.stages()[1].name, "Entrevista");
}
