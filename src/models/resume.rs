use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// A résumé produced by the generation service. The content layout belongs to
/// that service and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    #[serde(rename = "vagaId", default)]
    pub job_id: Option<Uuid>,
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "conteudo")]
    pub content: JsonValue,
    #[serde(
        rename = "dataCriacao",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
