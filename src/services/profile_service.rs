use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::profile_dto::UpdateProfilePayload;
use crate::error::Result;
use crate::models::profile::{CandidateProfile, ProfileSection};
use crate::utils::validation::validate;

const PROFILE_PATH: &str = "candidatos/perfil";

#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<CandidateProfile> {
        self.client.get(PROFILE_PATH).await
    }

    pub async fn update(&self, payload: &UpdateProfilePayload) -> Result<CandidateProfile> {
        validate(payload)?;
        self.client.put(PROFILE_PATH, payload).await
    }

    pub async fn list_section<S: ProfileSection>(&self) -> Result<Vec<S>> {
        self.client
            .get(&format!("{}/{}", PROFILE_PATH, S::PATH))
            .await
    }

    pub async fn add_to_section<S: ProfileSection>(&self, draft: &S::Draft) -> Result<S> {
        validate(draft)?;
        self.client
            .post(&format!("{}/{}", PROFILE_PATH, S::PATH), draft)
            .await
    }

    pub async fn update_in_section<S: ProfileSection>(
        &self,
        id: Uuid,
        draft: &S::Draft,
    ) -> Result<S> {
        validate(draft)?;
        self.client
            .put(&format!("{}/{}/{}", PROFILE_PATH, S::PATH, id), draft)
            .await
    }

    pub async fn remove_from_section<S: ProfileSection>(&self, id: Uuid) -> Result<()> {
        self.client
            .delete(&format!("{}/{}/{}", PROFILE_PATH, S::PATH, id))
            .await
    }
}
