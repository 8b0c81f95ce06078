use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::Job;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: Uuid,
    #[serde(rename = "vagaId")]
    pub job_id: Uuid,
    #[serde(rename = "vaga", default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    #[serde(
        rename = "dataSalvamento",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub saved_at: Option<DateTime<Utc>>,
}
