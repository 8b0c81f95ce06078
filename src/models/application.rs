use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pendente,
    Aceita,
    Rejeitada,
    Desistente,
    EmProcesso,
    Finalizada,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Pendente,
        ApplicationStatus::Aceita,
        ApplicationStatus::Rejeitada,
        ApplicationStatus::Desistente,
        ApplicationStatus::EmProcesso,
        ApplicationStatus::Finalizada,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pendente => "Pendente",
            ApplicationStatus::Aceita => "Aceita",
            ApplicationStatus::Rejeitada => "Rejeitada",
            ApplicationStatus::Desistente => "Desistente",
            ApplicationStatus::EmProcesso => "Em processo",
            ApplicationStatus::Finalizada => "Finalizada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    #[serde(rename = "vagaId")]
    pub job_id: Uuid,
    #[serde(rename = "candidatoId")]
    pub candidate_id: Uuid,
    pub status: ApplicationStatus,
    #[serde(rename = "dataCandidatura", with = "crate::utils::time::flexible")]
    pub applied_at: DateTime<Utc>,
    #[serde(rename = "curriculoUrl", default, skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
    #[serde(
        rename = "percentualCompatibilidade",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compatibility: Option<Decimal>,
    #[serde(rename = "vaga", default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    #[serde(rename = "candidatoNome", default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_cover_every_status() {
        let labels: Vec<_> = ApplicationStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), 6);
        assert!(labels.contains(&"Em processo"));
    }

    #[test]
    fn compatibility_is_optional() {
        let application: Application = serde_json::from_value(json!({
            "id": "1f0e2d3c-4b5a-4968-8776-655443322110",
            "vagaId": "7d0d2f7e-3a56-4a1b-8d6f-5c2f1b6a9e00",
            "candidatoId": "2a3b4c5d-6e7f-4809-9a1b-2c3d4e5f6071",
            "status": "EM_PROCESSO",
            "dataCandidatura": "2024-04-10T08:00:00"
        }))
        .unwrap();
        assert_eq!(application.status, ApplicationStatus::EmProcesso);
        assert!(application.compatibility.is_none());
        assert!(application.resume_file.is_none());
    }
}
