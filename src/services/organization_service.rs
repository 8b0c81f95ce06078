use crate::client::ApiClient;
use crate::dto::organization_dto::UpdateOrganizationPayload;
use crate::error::{Error, Result};
use crate::models::organization::Organization;
use crate::session::jwt;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct OrganizationService {
    client: ApiClient,
}

impl OrganizationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Organization> {
        self.client.get(&format!("organizacoes/{}", id)).await
    }

    /// The organization named in the current token's `organizacaoId` claim.
    pub async fn current(&self) -> Result<Organization> {
        let id = jwt::organization_id(self.client.store()).ok_or_else(|| {
            Error::Forbidden("Current user does not belong to an organization".to_string())
        })?;
        self.get(&id).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateOrganizationPayload) -> Result<Organization> {
        validate(payload)?;
        self.client
            .put(&format!("organizacoes/{}", id), payload)
            .await
    }
}
