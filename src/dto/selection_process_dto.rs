use serde::{Deserialize, Serialize};

/// Body of the advance and finalize transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Body of the transitions that target an explicit stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTransitionRequest {
    #[serde(rename = "etapaId")]
    pub stage_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Body of the reject transition, where feedback is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub feedback: String,
}
