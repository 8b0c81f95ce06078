pub mod client;
pub mod config;
pub mod dto;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::editor::StageEditor;
use crate::error::Result;
use crate::services::{
    application_service::ApplicationService, auth_service::AuthService,
    benefit_service::BenefitService, invitation_service::InvitationService,
    job_service::JobService, organization_service::OrganizationService,
    profile_service::ProfileService, resume_service::ResumeService,
    saved_job_service::SavedJobService, selection_process_service::SelectionProcessService,
    stage_service::StageService,
};
use crate::session::{Navigator, SessionStore};

/// Every resource service, sharing one authenticated client.
#[derive(Clone)]
pub struct ApiServices {
    pub client: ApiClient,
    pub auth: AuthService,
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub stages: StageService,
    pub selection_processes: SelectionProcessService,
    pub organizations: OrganizationService,
    pub benefits: BenefitService,
    pub saved_jobs: SavedJobService,
    pub profile: ProfileService,
    pub invitations: InvitationService,
    pub resumes: ResumeService,
}

impl ApiServices {
    pub fn new(
        config: &Config,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = ApiClient::new(config, store, navigator)?;

        Ok(Self {
            auth: AuthService::new(client.clone()),
            jobs: JobService::new(client.clone()),
            applications: ApplicationService::new(client.clone()),
            stages: StageService::new(client.clone()),
            selection_processes: SelectionProcessService::new(client.clone()),
            organizations: OrganizationService::new(client.clone()),
            benefits: BenefitService::new(client.clone()),
            saved_jobs: SavedJobService::new(client.clone()),
            profile: ProfileService::new(client.clone()),
            invitations: InvitationService::new(client.clone()),
            resumes: ResumeService::new(client.clone()),
            client,
        })
    }

    /// Fresh, empty stage editor for `job_id`; call `load` to fetch.
    pub fn stage_editor(&self, job_id: uuid::Uuid) -> StageEditor {
        StageEditor::new(job_id, self.stages.clone())
    }
}
