//! Per-action run state
//!
//! A run moves `Created -> Setup -> Executed -> Committed` on success, or
//! `Created -> Setup -> Failed -> CleanedUp` when the tool fails.

use std::path::{Path, PathBuf};

use crate::errors::{Result, lifecycle_error};

/// Stage reached by one action's run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Created,
    Setup,
    Executed,
    Committed,
    Failed,
    CleanedUp,
}

impl Stage {
    /// Whether a run may move from `self` to `to`
    pub fn can_advance_to(self, to: Stage) -> bool {
        matches!(
            (self, to),
            (Stage::Created, Stage::Setup)
                | (Stage::Setup, Stage::Executed)
                | (Stage::Setup, Stage::Failed)
                | (Stage::Executed, Stage::Committed)
                | (Stage::Failed, Stage::CleanedUp)
        )
    }
}

/// What a run has done so far, so that cleanup only undoes its own work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    stage: Stage,
    created_directory: Option<PathBuf>,
    launched: bool,
}

impl Default for RunState {
    fn default() -> Self {
        RunState::new()
    }
}

impl RunState {
    pub fn new() -> Self {
        RunState {
            stage: Stage::Created,
            created_directory: None,
            launched: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Moves to `to`
    ///
    /// # Errors
    /// Returns a lifecycle error if the transition is not allowed
    pub fn advance(&mut self, to: Stage) -> Result<()> {
        if !self.stage.can_advance_to(to) {
            return Err(lifecycle_error(self.stage, to));
        }
        self.stage = to;
        Ok(())
    }

    /// Fails unless the run is currently at `stage`
    pub fn require(&self, stage: Stage) -> Result<()> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(lifecycle_error(self.stage, stage))
        }
    }

    /// Topmost directory created by setup, if any
    ///
    /// Everything below it on the way to the target was created as well.
    pub fn created_directory(&self) -> Option<&Path> {
        self.created_directory.as_deref()
    }

    pub fn record_created_directory(&mut self, path: &Path) {
        self.created_directory = Some(path.to_path_buf());
    }

    /// Whether the external tool was started
    pub fn launched(&self) -> bool {
        self.launched
    }

    pub fn record_launch(&mut self) {
        self.launched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_success_path() {
        let mut state = RunState::new();

        state.advance(Stage::Setup).unwrap();
        state.advance(Stage::Executed).unwrap();
        state.advance(Stage::Committed).unwrap();

        assert_eq!(state.stage(), Stage::Committed);
    }

    #[test]
    fn test_failure_path() {
        let mut state = RunState::new();

        state.advance(Stage::Setup).unwrap();
        state.advance(Stage::Failed).unwrap();
        state.advance(Stage::CleanedUp).unwrap();

        assert_eq!(state.stage(), Stage::CleanedUp);
    }

    #[test]
    fn test_illegal_transitions() {
        let mut state = RunState::new();

        assert_eq!(
            state.advance(Stage::Executed).unwrap_err().kind(),
            ErrorKind::Lifecycle
        );
        assert_eq!(state.stage(), Stage::Created);

        state.advance(Stage::Setup).unwrap();
        state.advance(Stage::Executed).unwrap();
        assert!(state.advance(Stage::Failed).is_err());
        assert!(state.require(Stage::Setup).is_err());
        assert!(state.require(Stage::Executed).is_ok());
    }

    #[test]
    fn test_records() {
        let mut state = RunState::default();
        assert!(!state.launched());
        assert!(state.created_directory().is_none());

        state.record_launch();
        state.record_created_directory(Path::new("out"));

        assert!(state.launched());
        assert_eq!(state.created_directory(), Some(Path::new("out")));
    }
}
