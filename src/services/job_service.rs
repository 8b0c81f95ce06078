use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::job_dto::{
    CreateJobPayload, JobListQuery, JobStatusUpdate, Page, UpdateJobPayload,
};
use crate::error::Result;
use crate::models::job::{Job, JobStatus};
use crate::utils::validation::{field_error, validate};

#[derive(Clone)]
pub struct JobService {
    client: ApiClient,
}

impl JobService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &JobListQuery) -> Result<Page<Job>> {
        self.client.get_query("vagas", query).await
    }

    pub async fn list_by_organization(&self, organization_id: &str) -> Result<Vec<Job>> {
        self.client
            .get(&format!("organizacoes/{}/vagas", organization_id))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Job> {
        self.client.get(&format!("vagas/{}", id)).await
    }

    pub async fn create(&self, payload: &CreateJobPayload) -> Result<Job> {
        validate(payload)?;
        check_salary_range(payload.salary_min, payload.salary_max)?;
        let job: Job = self.client.post("vagas", payload).await?;
        info!("Created job {} ({})", job.id, job.title);
        Ok(job)
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateJobPayload) -> Result<Job> {
        validate(payload)?;
        check_salary_range(payload.salary_min, payload.salary_max)?;
        self.client.put(&format!("vagas/{}", id), payload).await
    }

    pub async fn update_status(&self, id: Uuid, status: JobStatus) -> Result<Job> {
        let job = self
            .client
            .patch(&format!("vagas/{}/status", id), &JobStatusUpdate { status })
            .await?;
        info!("Job {} moved to {:?}", id, status);
        Ok(job)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.client.delete(&format!("vagas/{}", id)).await
    }
}

fn check_salary_range(
    min: Option<rust_decimal::Decimal>,
    max: Option<rust_decimal::Decimal>,
) -> Result<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(field_error(
            "salarioMinimo",
            "range",
            "Minimum salary cannot exceed maximum salary",
        )),
        _ => Ok(()),
    }
}
