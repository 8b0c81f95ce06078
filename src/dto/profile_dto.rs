use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 2))]
    pub state: Option<String>,
    #[serde(rename = "resumo", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub github: Option<String>,
    #[serde(rename = "dataNascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceDraft {
    #[serde(rename = "empresa")]
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(rename = "cargo")]
    #[validate(length(min = 1))]
    pub role: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "atual")]
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EducationDraft {
    #[serde(rename = "instituicao")]
    #[validate(length(min = 1))]
    pub institution: String,
    #[serde(rename = "curso")]
    #[validate(length(min = 1))]
    pub course: String,
    #[serde(rename = "nivel", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "dataInicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillDraft {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "nivel", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LanguageDraft {
    #[serde(rename = "idioma")]
    #[validate(length(min = 1))]
    pub language: String,
    #[serde(rename = "nivel")]
    #[validate(length(min = 1))]
    pub proficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CertificationDraft {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "instituicao", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "dataEmissao", skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub credential_url: Option<String>,
}
