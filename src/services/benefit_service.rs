use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::organization_dto::NewBenefit;
use crate::error::Result;
use crate::models::benefit::Benefit;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct BenefitService {
    client: ApiClient,
}

impl BenefitService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, organization_id: &str) -> Result<Vec<Benefit>> {
        self.client
            .get(&format!("organizacoes/{}/beneficios", organization_id))
            .await
    }

    pub async fn create(&self, organization_id: &str, payload: &NewBenefit) -> Result<Benefit> {
        validate(payload)?;
        self.client
            .post(&format!("organizacoes/{}/beneficios", organization_id), payload)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.client.delete(&format!("beneficios/{}", id)).await
    }
}
