use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    Pendente,
    Aceito,
    Recusado,
    Expirado,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    #[serde(rename = "vagaId")]
    pub job_id: Uuid,
    #[serde(rename = "vagaTitulo", default)]
    pub job_title: Option<String>,
    #[serde(rename = "candidatoId")]
    pub candidate_id: Uuid,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    pub status: InvitationStatus,
    #[serde(rename = "dataEnvio", with = "crate::utils::time::flexible")]
    pub sent_at: DateTime<Utc>,
}
