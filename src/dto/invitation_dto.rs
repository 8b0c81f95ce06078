use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewInvitation {
    #[serde(rename = "vagaId")]
    pub job_id: Uuid,
    #[serde(rename = "candidatoId")]
    pub candidate_id: Uuid,
    #[serde(rename = "mensagem", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationReply {
    #[serde(rename = "aceito")]
    pub accepted: bool,
}
