use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: Uuid,
    #[serde(
        rename = "organizacaoId",
        default,
        with = "crate::utils::id::flexible_option"
    )]
    pub organization_id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}
