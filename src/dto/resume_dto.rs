use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateResumeRequest {
    #[serde(rename = "vagaId", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<Uuid>,
    #[serde(rename = "instrucoes", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4000))]
    pub instructions: Option<String>,
}
