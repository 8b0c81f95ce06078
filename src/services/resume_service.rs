use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::resume_dto::GenerateResumeRequest;
use crate::error::Result;
use crate::models::resume::Resume;
use crate::utils::validation::validate;

/// Client for the résumé-generation endpoints. Generation and PDF rendering
/// happen server-side.
#[derive(Clone)]
pub struct ResumeService {
    client: ApiClient,
}

impl ResumeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, request: &GenerateResumeRequest) -> Result<Resume> {
        validate(request)?;
        let resume: Resume = self.client.post("curriculos/gerar", request).await?;
        info!("Generated resume {}", resume.id);
        Ok(resume)
    }

    pub async fn list(&self) -> Result<Vec<Resume>> {
        self.client.get("curriculos").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Resume> {
        self.client.get(&format!("curriculos/{}", id)).await
    }

    pub async fn download_pdf(&self, id: Uuid) -> Result<Bytes> {
        self.client
            .get_bytes(&format!("curriculos/{}/pdf", id))
            .await
    }
}
