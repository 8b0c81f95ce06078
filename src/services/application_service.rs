use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::application_dto::{ApplicationStatusUpdate, ApplyRequest};
use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus};

#[derive(Clone)]
pub struct ApplicationService {
    client: ApiClient,
}

impl ApplicationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn apply(&self, job_id: Uuid, resume_file: Option<String>) -> Result<Application> {
        let application: Application = self
            .client
            .post("candidaturas", &ApplyRequest { job_id, resume_file })
            .await?;
        info!("Applied to job {} (application {})", job_id, application.id);
        Ok(application)
    }

    pub async fn list_mine(&self) -> Result<Vec<Application>> {
        self.client.get("candidaturas/minhas").await
    }

    pub async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>> {
        self.client
            .get(&format!("vagas/{}/candidaturas", job_id))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Application> {
        self.client.get(&format!("candidaturas/{}", id)).await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        feedback: Option<String>,
    ) -> Result<Application> {
        self.client
            .patch(
                &format!("candidaturas/{}/status", id),
                &ApplicationStatusUpdate { status, feedback },
            )
            .await
    }

    pub async fn withdraw(&self, id: Uuid) -> Result<()> {
        self.client.delete(&format!("candidaturas/{}", id)).await?;
        info!("Withdrew application {}", id);
        Ok(())
    }
}
