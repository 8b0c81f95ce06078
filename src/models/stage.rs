use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageType {
    #[default]
    Triagem,
    EntrevistaTelefonica,
    TesteTecnico,
    EntrevistaPresencial,
    EntrevistaOnline,
    DinamicaGrupo,
    AvaliacaoPsicologica,
    Case,
    PropostaSalarial,
    Outra,
}

impl StageType {
    pub const ALL: [StageType; 10] = [
        StageType::Triagem,
        StageType::EntrevistaTelefonica,
        StageType::TesteTecnico,
        StageType::EntrevistaPresencial,
        StageType::EntrevistaOnline,
        StageType::DinamicaGrupo,
        StageType::AvaliacaoPsicologica,
        StageType::Case,
        StageType::PropostaSalarial,
        StageType::Outra,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StageType::Triagem => "Triagem",
            StageType::EntrevistaTelefonica => "Entrevista telefônica",
            StageType::TesteTecnico => "Teste técnico",
            StageType::EntrevistaPresencial => "Entrevista presencial",
            StageType::EntrevistaOnline => "Entrevista online",
            StageType::DinamicaGrupo => "Dinâmica de grupo",
            StageType::AvaliacaoPsicologica => "Avaliação psicológica",
            StageType::Case => "Case",
            StageType::PropostaSalarial => "Proposta salarial",
            StageType::Outra => "Outra",
        }
    }
}

impl FromStr for StageType {
    type Err = String;

    /// Accepts wire names in any case, e.g. `teste_tecnico`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wire = s.trim().to_ascii_uppercase();
        if wire.is_empty() {
            return Err("Stage type is required".to_string());
        }
        serde_json::from_value(serde_json::Value::String(wire))
            .map_err(|_| format!("Unknown stage type: {}", s.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
}

impl StageStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Concluida | StageStatus::Cancelada)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    #[serde(rename = "vagaId", default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<Uuid>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub stage_type: StageType,
    #[serde(rename = "ordem")]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StageStatus>,
}

impl Stage {
    /// Server-issued ids are UUIDs; locally proposed stages carry a random
    /// alphanumeric id without hyphens until they are saved.
    pub fn is_persisted(&self) -> bool {
        self.id.contains('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_api_stage() {
        let stage: Stage = serde_json::from_value(json!({
            "id": "0b6f3c0e-4d1e-4a57-9a65-1c1f0f1a2b3c",
            "vagaId": "7d0d2f7e-3a56-4a1b-8d6f-5c2f1b6a9e00",
            "nome": "Triagem de currículos",
            "descricao": null,
            "tipo": "TRIAGEM",
            "ordem": 1,
            "status": "EM_ANDAMENTO"
        }))
        .unwrap();
        assert_eq!(stage.stage_type, StageType::Triagem);
        assert_eq!(stage.status, Some(StageStatus::EmAndamento));
        assert!(stage.is_persisted());
    }

    #[test]
    fn temporary_ids_are_not_persisted() {
        let stage = Stage {
            id: "k3j9x0a2b".to_string(),
            job_id: None,
            name: "Case".to_string(),
            description: None,
            stage_type: StageType::Case,
            order: 2,
            status: None,
        };
        assert!(!stage.is_persisted());
    }

    #[test]
    fn parses_type_names_case_insensitively() {
        assert_eq!("teste_tecnico".parse::<StageType>(), Ok(StageType::TesteTecnico));
        assert!("".parse::<StageType>().is_err());
        assert!("ENTREVISTA".parse::<StageType>().is_err());
    }

    #[test]
    fn multiword_types_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(StageType::EntrevistaTelefonica).unwrap(),
            json!("ENTREVISTA_TELEFONICA")
        );
        assert_eq!(
            serde_json::to_value(StageType::AvaliacaoPsicologica).unwrap(),
            json!("AVALIACAO_PSICOLOGICA")
        );
    }
}
