use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::profile_dto::{
    CertificationDraft, EducationDraft, ExperienceDraft, LanguageDraft, SkillDraft,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(rename = "resumo", default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<NaiveDate>,
}

/// A repeatable section of the candidate profile, served under
/// `/candidatos/perfil/{PATH}`.
pub trait ProfileSection: DeserializeOwned + Send + Sync + 'static {
    const PATH: &'static str;
    type Draft: Serialize + Validate + Send + Sync;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataFim", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "atual", default)]
    pub current: bool,
}

impl ProfileSection for Experience {
    const PATH: &'static str = "experiencias";
    type Draft = ExperienceDraft;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    #[serde(rename = "instituicao")]
    pub institution: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "nivel", default)]
    pub level: Option<String>,
    #[serde(rename = "dataInicio", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dataFim", default)]
    pub end_date: Option<NaiveDate>,
}

impl ProfileSection for Education {
    const PATH: &'static str = "formacoes";
    type Draft = EducationDraft;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nivel", default)]
    pub level: Option<String>,
}

impl ProfileSection for Skill {
    const PATH: &'static str = "habilidades";
    type Draft = SkillDraft;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: Uuid,
    #[serde(rename = "idioma")]
    pub language: String,
    #[serde(rename = "nivel")]
    pub proficiency: String,
}

impl ProfileSection for Language {
    const PATH: &'static str = "idiomas";
    type Draft = LanguageDraft;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "instituicao", default)]
    pub issuer: Option<String>,
    #[serde(rename = "dataEmissao", default)]
    pub issued_on: Option<NaiveDate>,
    #[serde(rename = "url", default)]
    pub credential_url: Option<String>,
}

impl ProfileSection for Certification {
    const PATH: &'static str = "certificacoes";
    type Draft = CertificationDraft;
}
