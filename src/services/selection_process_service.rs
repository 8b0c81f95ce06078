//! Transitions and reads on a selection process.
//!
//! Transition legality lives on the server. Nothing here inspects the current
//! stage before calling; a refused transition comes back as the server's
//! error message.

use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::dto::selection_process_dto::{FeedbackRequest, RejectRequest, StageTransitionRequest};
use crate::error::Result;
use crate::models::selection_process::{ProcessHistoryEntry, SelectionProcess};
use crate::utils::validation::field_error;

#[derive(Clone)]
pub struct SelectionProcessService {
    client: ApiClient,
}

impl SelectionProcessService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Moves to whichever stage the server considers next.
    pub async fn advance(&self, id: Uuid, feedback: Option<String>) -> Result<SelectionProcess> {
        let process = self
            .client
            .post(
                &format!("processos-seletivos/{}/avancar", id),
                &FeedbackRequest { feedback },
            )
            .await?;
        info!("Selection process {} advanced", id);
        Ok(process)
    }

    pub async fn advance_to_stage(
        &self,
        id: Uuid,
        stage_id: &str,
        feedback: Option<String>,
    ) -> Result<SelectionProcess> {
        let process = self
            .client
            .post(
                &format!("processos-seletivos/{}/avancar-para-etapa", id),
                &StageTransitionRequest {
                    stage_id: stage_id.to_string(),
                    feedback,
                },
            )
            .await?;
        info!("Selection process {} advanced to stage {}", id, stage_id);
        Ok(process)
    }

    pub async fn return_to_stage(
        &self,
        id: Uuid,
        stage_id: &str,
        feedback: Option<String>,
    ) -> Result<SelectionProcess> {
        let process = self
            .client
            .post(
                &format!("processos-seletivos/{}/retornar-para-etapa", id),
                &StageTransitionRequest {
                    stage_id: stage_id.to_string(),
                    feedback,
                },
            )
            .await?;
        info!("Selection process {} returned to stage {}", id, stage_id);
        Ok(process)
    }

    pub async fn finalize(&self, id: Uuid, feedback: Option<String>) -> Result<SelectionProcess> {
        let process = self
            .client
            .post(
                &format!("processos-seletivos/{}/finalizar", id),
                &FeedbackRequest { feedback },
            )
            .await?;
        info!("Selection process {} finalized", id);
        Ok(process)
    }

    /// Rejects the candidate. Feedback is required and sent verbatim.
    pub async fn reject(&self, id: Uuid, feedback: &str) -> Result<SelectionProcess> {
        if feedback.trim().is_empty() {
            return Err(field_error(
                "feedback",
                "required",
                "Feedback is required to reject a candidate",
            ));
        }
        let process = self
            .client
            .post(
                &format!("processos-seletivos/{}/reprovar", id),
                &RejectRequest {
                    feedback: feedback.to_string(),
                },
            )
            .await?;
        info!("Selection process {} rejected", id);
        Ok(process)
    }

    pub async fn get(&self, id: Uuid) -> Result<SelectionProcess> {
        self.client
            .get(&format!("processos-seletivos/{}", id))
            .await
    }

    pub async fn get_by_application(&self, application_id: Uuid) -> Result<SelectionProcess> {
        self.client
            .get(&format!("processos-seletivos/candidatura/{}", application_id))
            .await
    }

    pub async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<SelectionProcess>> {
        self.client
            .get(&format!("processos-seletivos/vaga/{}", job_id))
            .await
    }

    /// Stage-entry events in the order the server returns them.
    pub async fn history(&self, id: Uuid) -> Result<Vec<ProcessHistoryEntry>> {
        self.client
            .get(&format!("processos-seletivos/{}/historico", id))
            .await
    }
}
