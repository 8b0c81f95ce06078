use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::invitation_dto::{InvitationReply, NewInvitation};
use crate::error::Result;
use crate::models::invitation::Invitation;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct InvitationService {
    client: ApiClient,
}

impl InvitationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn send(&self, payload: &NewInvitation) -> Result<Invitation> {
        validate(payload)?;
        let invitation: Invitation = self.client.post("convites", payload).await?;
        info!(
            "Invited candidate {} to job {}",
            payload.candidate_id, payload.job_id
        );
        Ok(invitation)
    }

    pub async fn list_received(&self) -> Result<Vec<Invitation>> {
        self.client.get("convites/recebidos").await
    }

    pub async fn list_sent(&self) -> Result<Vec<Invitation>> {
        self.client.get("convites/enviados").await
    }

    pub async fn respond(&self, id: Uuid, accepted: bool) -> Result<Invitation> {
        self.client
            .patch(&format!("convites/{}", id), &InvitationReply { accepted })
            .await
    }
}
