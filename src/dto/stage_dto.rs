use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::stage::{Stage, StageType};

/// Body of `POST /vagas/{vagaId}/etapas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewStage {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub stage_type: StageType,
    #[serde(rename = "ordem")]
    #[validate(range(min = 1))]
    pub order: i32,
}

impl From<&Stage> for NewStage {
    fn from(stage: &Stage) -> Self {
        Self {
            name: stage.name.clone(),
            description: stage.description.clone(),
            stage_type: stage.stage_type,
            order: stage.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStage {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub stage_type: Option<StageType>,
    #[serde(rename = "ordem", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub order: Option<i32>,
}
