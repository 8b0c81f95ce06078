pub mod application_service;
pub mod auth_service;
pub mod benefit_service;
pub mod invitation_service;
pub mod job_service;
pub mod organization_service;
pub mod profile_service;
pub mod resume_service;
pub mod saved_job_service;
pub mod selection_process_service;
pub mod stage_service;
