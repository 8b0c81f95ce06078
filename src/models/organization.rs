use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(with = "crate::utils::id::flexible")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "setor", default)]
    pub sector: Option<String>,
    #[serde(
        rename = "dataCriacao",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
