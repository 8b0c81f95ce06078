pub mod stage_editor;

pub use stage_editor::{
    Completed, Direction, FailedStage, SaveReport, StageDraft, StageEditError, StageEditor,
};
