pub mod application_dto;
pub mod auth_dto;
pub mod invitation_dto;
pub mod job_dto;
pub mod organization_dto;
pub mod profile_dto;
pub mod resume_dto;
pub mod selection_process_dto;
pub mod stage_dto;
