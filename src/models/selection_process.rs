use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::stage::{StageStatus, StageType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSummary {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub stage_type: Option<StageType>,
    #[serde(rename = "ordem", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StageStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionProcess {
    pub id: Uuid,
    #[serde(rename = "candidaturaId")]
    pub application_id: Uuid,
    #[serde(rename = "etapaAtualId")]
    pub current_stage_id: String,
    #[serde(rename = "etapaAtual", default, skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<StageSummary>,
    #[serde(rename = "dataInicio", with = "crate::utils::time::flexible")]
    pub started_at: DateTime<Utc>,
    #[serde(
        rename = "dataFim",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "dataUltimaMudanca",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub last_transition_at: Option<DateTime<Utc>>,
}

impl SelectionProcess {
    /// A process is closed once a finalize or reject transition set its end date.
    pub fn is_closed(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Iniciou,
    Avancou,
    Retornou,
    Finalizou,
    Reprovou,
    #[serde(other)]
    Outro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessHistoryEntry {
    pub id: Uuid,
    #[serde(rename = "etapaId")]
    pub stage_id: String,
    #[serde(rename = "etapaNome", default)]
    pub stage_name: Option<String>,
    #[serde(rename = "acao")]
    pub action: HistoryAction,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(rename = "usuarioId", default)]
    pub actor_id: Option<Uuid>,
    #[serde(rename = "usuarioNome", default)]
    pub actor_name: Option<String>,
    #[serde(rename = "dataMudanca", with = "crate::utils::time::flexible")]
    pub occurred_at: DateTime<Utc>,
}
