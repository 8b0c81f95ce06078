use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Rascunho,
    Aberta,
    Pausada,
    Fechada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkModality {
    Presencial,
    Remoto,
    Hibrido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Clt,
    Pj,
    Estagio,
    Temporario,
    Freelancer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    #[serde(
        rename = "organizacaoId",
        default,
        with = "crate::utils::id::flexible_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_id: Option<String>,
    #[serde(rename = "organizacaoNome", default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "requisitos", default)]
    pub requirements: Option<String>,
    #[serde(rename = "localizacao", default)]
    pub location: Option<String>,
    #[serde(rename = "modalidade", default)]
    pub modality: Option<WorkModality>,
    #[serde(rename = "tipoContrato", default)]
    pub contract_type: Option<ContractType>,
    #[serde(rename = "salarioMinimo", default)]
    pub salary_min: Option<Decimal>,
    #[serde(rename = "salarioMaximo", default)]
    pub salary_max: Option<Decimal>,
    pub status: JobStatus,
    #[serde(
        rename = "dataPublicacao",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "dataCriacao",
        default,
        with = "crate::utils::time::flexible_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
