use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::organization_dto::SaveJobRequest;
use crate::error::Result;
use crate::models::saved_job::SavedJob;

#[derive(Clone)]
pub struct SavedJobService {
    client: ApiClient,
}

impl SavedJobService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<SavedJob>> {
        self.client.get("vagas-salvas").await
    }

    pub async fn save(&self, job_id: Uuid) -> Result<SavedJob> {
        self.client
            .post("vagas-salvas", &SaveJobRequest { job_id })
            .await
    }

    pub async fn remove(&self, job_id: Uuid) -> Result<()> {
        self.client
            .delete(&format!("vagas-salvas/{}", job_id))
            .await
    }

    pub async fn is_saved(&self, job_id: Uuid) -> Result<bool> {
        Ok(self.list().await?.iter().any(|s| s.job_id == job_id))
    }
}
