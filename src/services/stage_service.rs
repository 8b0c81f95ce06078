use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::stage_dto::{NewStage, UpdateStage};
use crate::error::Result;
use crate::models::stage::Stage;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct StageService {
    client: ApiClient,
}

impl StageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, job_id: Uuid) -> Result<Vec<Stage>> {
        self.client.get(&format!("vagas/{}/etapas", job_id)).await
    }

    pub async fn create(&self, job_id: Uuid, payload: &NewStage) -> Result<Stage> {
        validate(payload)?;
        self.client
            .post(&format!("vagas/{}/etapas", job_id), payload)
            .await
    }

    pub async fn update(&self, job_id: Uuid, stage_id: &str, payload: &UpdateStage) -> Result<Stage> {
        validate(payload)?;
        self.client
            .put(&format!("vagas/{}/etapas/{}", job_id, stage_id), payload)
            .await
    }

    pub async fn delete(&self, job_id: Uuid, stage_id: &str) -> Result<()> {
        self.client
            .delete(&format!("vagas/{}/etapas/{}", job_id, stage_id))
            .await
    }
}
