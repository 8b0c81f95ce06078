//! Working copy of a job's pipeline stages.
//!
//! The list lives only in this editor until `save`, which creates the stages
//! that have no server id yet. Position 1 always holds the screening stage
//! created by the server; it cannot be removed, moved, or overtaken.

use futures::future::join_all;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::dto::stage_dto::NewStage;
use crate::error::{Error, Result};
use crate::models::stage::{Stage, StageType};
use crate::services::stage_service::StageService;
use crate::utils::token::generate_temp_id;
use crate::utils::validation::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageEditError {
    #[error("The screening stage must stay at position 1")]
    ScreeningLocked,
    #[error("No stage at index {0}")]
    OutOfRange(usize),
    #[error("Stage is already last")]
    AtEnd,
    #[error("Stages must be loaded before new ones are added")]
    NotLoaded,
}

/// Input for a locally proposed stage.
#[derive(Debug, Clone, Default)]
pub struct StageDraft {
    pub name: String,
    pub stage_type: Option<StageType>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct FailedStage {
    pub temp_id: String,
    pub name: String,
    pub error: Error,
}

/// Per-stage outcome of a save. Stages created before a failure stay created.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub created: Vec<Stage>,
    pub failed: Vec<FailedStage>,
}

impl SaveReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Single aggregate notice for the failed creates, if any.
    pub fn notice(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        Some(format!(
            "Failed to save {} of {} new stages. Please try again.",
            self.failed.len(),
            self.failed.len() + self.created.len()
        ))
    }
}

/// Returned by both `finish` and `skip`; callers get no signal of which one
/// closed the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed;

pub struct StageEditor {
    job_id: Uuid,
    service: StageService,
    stages: Vec<Stage>,
}

impl StageEditor {
    pub fn new(job_id: Uuid, service: StageService) -> Self {
        Self {
            job_id,
            service,
            stages: Vec::new(),
        }
    }

    /// Editor seeded with an already fetched list.
    pub fn with_stages(job_id: Uuid, service: StageService, mut stages: Vec<Stage>) -> Self {
        stages.sort_by_key(|s| s.order);
        Self {
            job_id,
            service,
            stages,
        }
    }

    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn pending(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter().filter(|s| !s.is_persisted())
    }

    /// Replaces the working list with the server's, ordered by position. A
    /// failed fetch leaves the editor empty and is only logged.
    pub async fn load(&mut self) {
        match self.service.list(self.job_id).await {
            Ok(mut stages) => {
                stages.sort_by_key(|s| s.order);
                debug!("Loaded {} stages for job {}", stages.len(), self.job_id);
                self.stages = stages;
            }
            Err(e) => {
                warn!("Failed to load stages for job {}: {}", self.job_id, e);
                self.stages.clear();
            }
        }
    }

    /// Appends a stage at the next position under a temporary id. Refused on
    /// an empty list, whose position 1 belongs to the server's screening stage.
    pub fn add(&mut self, draft: StageDraft) -> Result<&Stage> {
        if self.stages.is_empty() {
            return Err(StageEditError::NotLoaded.into());
        }
        let payload = NewStage {
            name: draft.name.trim().to_string(),
            description: draft
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            stage_type: draft.stage_type.unwrap_or_default(),
            order: self.stages.len() as i32 + 1,
        };
        validate(&payload)?;

        let index = self.stages.len();
        self.stages.push(Stage {
            id: generate_temp_id(),
            job_id: Some(self.job_id),
            name: payload.name,
            description: payload.description,
            stage_type: payload.stage_type,
            order: payload.order,
            status: None,
        });
        Ok(&self.stages[index])
    }

    pub fn remove(&mut self, index: usize) -> std::result::Result<Stage, StageEditError> {
        if index >= self.stages.len() {
            return Err(StageEditError::OutOfRange(index));
        }
        if index == 0 {
            return Err(StageEditError::ScreeningLocked);
        }
        let removed = self.stages.remove(index);
        self.renumber();
        Ok(removed)
    }

    pub fn move_stage(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> std::result::Result<(), StageEditError> {
        if index >= self.stages.len() {
            return Err(StageEditError::OutOfRange(index));
        }
        if index == 0 {
            return Err(StageEditError::ScreeningLocked);
        }
        let target = match direction {
            Direction::Up => index - 1,
            Direction::Down => index + 1,
        };
        if target == 0 {
            return Err(StageEditError::ScreeningLocked);
        }
        if target >= self.stages.len() {
            return Err(StageEditError::AtEnd);
        }
        self.stages.swap(index, target);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, stage) in self.stages.iter_mut().enumerate() {
            stage.order = i as i32 + 1;
        }
    }

    /// Creates every stage without a server id, concurrently and
    /// independently. Persisted stages are never sent. The working list is
    /// left untouched so a partial failure can be retried.
    pub async fn save(&self) -> SaveReport {
        let pending: Vec<&Stage> = self.pending().collect();
        if pending.is_empty() {
            debug!("No new stages to save for job {}", self.job_id);
            return SaveReport::default();
        }

        let creates = pending.iter().map(|stage| {
            let payload = NewStage::from(*stage);
            async move { self.service.create(self.job_id, &payload).await }
        });
        let results = join_all(creates).await;

        let mut report = SaveReport::default();
        for (stage, result) in pending.into_iter().zip(results) {
            match result {
                Ok(created) => report.created.push(created),
                Err(e) => {
                    error!(
                        "Failed to create stage '{}' for job {}: {}",
                        stage.name, self.job_id, e
                    );
                    report.failed.push(FailedStage {
                        temp_id: stage.id.clone(),
                        name: stage.name.clone(),
                        error: e,
                    });
                }
            }
        }

        info!(
            "Saved stages for job {}: {} created, {} failed",
            self.job_id,
            report.created.len(),
            report.failed.len()
        );
        report
    }

    /// Saves, then reloads from the server when every create succeeded.
    pub async fn save_and_reload(&mut self) -> SaveReport {
        let report = self.save().await;
        if report.is_success() && !report.created.is_empty() {
            self.load().await;
        }
        report
    }

    pub fn finish(self) -> Completed {
        Completed
    }

    /// Closes without saving; unsaved stages are dropped with the editor.
    pub fn skip(self) -> Completed {
        if self.pending().next().is_some() {
            debug!("Discarding unsaved stages for job {}", self.job_id);
        }
        Completed
    }
}
