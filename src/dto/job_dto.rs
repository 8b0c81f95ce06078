use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::job::{ContractType, JobStatus, WorkModality};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(rename = "descricao")]
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(rename = "requisitos", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "modalidade", skip_serializing_if = "Option::is_none")]
    pub modality: Option<WorkModality>,
    #[serde(rename = "tipoContrato", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(rename = "salarioMinimo", skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<Decimal>,
    #[serde(rename = "salarioMaximo", skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(rename = "beneficioIds", default, skip_serializing_if = "Vec::is_empty")]
    pub benefit_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(rename = "requisitos", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "modalidade", skip_serializing_if = "Option::is_none")]
    pub modality: Option<WorkModality>,
    #[serde(rename = "tipoContrato", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(rename = "salarioMinimo", skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<Decimal>,
    #[serde(rename = "salarioMaximo", skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusUpdate {
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobListQuery {
    #[serde(rename = "page", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(rename = "organizacaoId", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(rename = "totalElements", default)]
    pub total_elements: u64,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}
