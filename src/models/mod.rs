pub mod application;
pub mod benefit;
pub mod invitation;
pub mod job;
pub mod organization;
pub mod profile;
pub mod resume;
pub mod saved_job;
pub mod selection_process;
pub mod stage;
pub mod user;
