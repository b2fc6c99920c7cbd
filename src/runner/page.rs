//! Runner for the page transforms driven by `convert`

use std::fs;
use std::path::Path;

use log::debug;

use crate::actions::Action;
use crate::config::Settings;
use crate::errors::{Result, file_operation_error, not_found_error};

use super::dirs::{create_missing_dirs, remove_empty_dirs};
use super::process::run_tool;
use super::state::{RunState, Stage};
use super::Runner;

/// Runs `ChangeResolution`, `ResamplePage` and `ExpandPageWithFill`
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRunner;

impl Runner for PageRunner {
    fn setup(&self, action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Created)?;

        if !action.source().is_file() {
            return Err(not_found_error(action.source().to_path_buf()));
        }

        if let Some(parent) = action.target().parent()
            && !parent.as_os_str().is_empty()
            && let Some(created) = create_missing_dirs(parent)?
        {
            state.record_created_directory(&created);
        }

        state.advance(Stage::Setup)
    }

    fn execute(&self, action: &Action, settings: &Settings, state: &mut RunState) -> Result<()> {
        state.require(Stage::Setup)?;
        state.record_launch();
        run_tool(action, settings)?;
        state.advance(Stage::Executed)
    }

    fn commit(&self, action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Executed)?;

        if action.is_in_place() {
            debug!(
                "Replacing {} with {}",
                action.source().display(),
                action.target().display()
            );
            replace_file(action.target(), action.source())?;
        }

        state.advance(Stage::Committed)
    }

    fn cleanup(&self, action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Failed)?;

        let target = action.target();
        if state.launched() && target != action.source() && target.is_file() {
            debug!("Removing partial output: {}", target.display());
            fs::remove_file(target)
                .map_err(|e| file_operation_error(e, target.to_path_buf(), "remove"))?;
        }

        if let Some(top) = state.created_directory()
            && let Some(parent) = target.parent()
        {
            remove_empty_dirs(parent, top)?;
        }

        state.advance(Stage::CleanedUp)
    }
}

/// Moves `from` over `to` in a single rename
#[cfg(not(windows))]
fn replace_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| file_operation_error(e, from.to_path_buf(), "rename"))
}

/// Moves `from` over `to`; the destination has to go first on Windows
#[cfg(windows)]
fn replace_file(from: &Path, to: &Path) -> Result<()> {
    fs::remove_file(to).map_err(|e| file_operation_error(e, to.to_path_buf(), "remove"))?;
    fs::rename(from, to).map_err(|e| file_operation_error(e, from.to_path_buf(), "rename"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::change_resolution;
    use crate::errors::ErrorKind;
    use crate::values::make_resolution;
    use tempfile::tempdir;

    fn action(source: &Path, target: Option<&Path>) -> Action {
        let resolution = make_resolution("300", "PixelsPerInch").unwrap();
        change_resolution::make(resolution, source, target, &Settings::default())
    }

    fn executed(runner: &PageRunner, action: &Action) -> RunState {
        let mut state = RunState::new();
        runner.setup(action, &mut state).unwrap();
        state.record_launch();
        state.advance(Stage::Executed).unwrap();
        state
    }

    #[test]
    fn test_setup_missing_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        let target = dir.path().join("out").join("p1.tiff");
        let action = action(&source, Some(&target));
        let mut state = RunState::new();

        let err = PageRunner.setup(&action, &mut state).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(state.stage(), Stage::Created);
        assert!(!dir.path().join("out").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_setup_creates_target_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"page").unwrap();
        let target = dir.path().join("out").join("p1.tiff");
        let action = action(&source, Some(&target));
        let mut state = RunState::new();

        PageRunner.setup(&action, &mut state).unwrap();

        assert!(dir.path().join("out").is_dir());
        assert_eq!(state.created_directory(), Some(dir.path().join("out").as_path()));
        assert_eq!(state.stage(), Stage::Setup);
    }

    #[test]
    fn test_setup_records_topmost_created_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"page").unwrap();
        let target = dir.path().join("out").join("a").join("p1.tiff");
        let action = action(&source, Some(&target));
        let mut state = RunState::new();

        PageRunner.setup(&action, &mut state).unwrap();

        assert!(dir.path().join("out").join("a").is_dir());
        assert_eq!(state.created_directory(), Some(dir.path().join("out").as_path()));
    }

    #[test]
    fn test_commit_replaces_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"original").unwrap();
        let action = action(&source, None);
        let mut state = executed(&PageRunner, &action);
        fs::write(action.target(), b"transformed").unwrap();

        PageRunner.commit(&action, &mut state).unwrap();

        assert_eq!(fs::read(&source).unwrap(), b"transformed");
        assert!(!action.target().exists());
        assert_eq!(state.stage(), Stage::Committed);
    }

    #[test]
    fn test_commit_keeps_explicit_target() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        let target = dir.path().join("p1-300.tiff");
        fs::write(&source, b"original").unwrap();
        let action = action(&source, Some(&target));
        let mut state = executed(&PageRunner, &action);
        fs::write(&target, b"transformed").unwrap();

        PageRunner.commit(&action, &mut state).unwrap();

        assert_eq!(fs::read(&source).unwrap(), b"original");
        assert_eq!(fs::read(&target).unwrap(), b"transformed");
    }

    #[test]
    fn test_cleanup_removes_partial_output() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"original").unwrap();
        let target = dir.path().join("out").join("p1.tiff");
        let action = action(&source, Some(&target));
        let mut state = RunState::new();
        PageRunner.setup(&action, &mut state).unwrap();
        state.record_launch();
        fs::write(&target, b"partial").unwrap();
        state.advance(Stage::Failed).unwrap();

        PageRunner.cleanup(&action, &mut state).unwrap();

        assert!(!target.exists());
        assert!(!dir.path().join("out").exists());
        assert_eq!(fs::read(&source).unwrap(), b"original");
        assert_eq!(state.stage(), Stage::CleanedUp);
    }

    #[test]
    fn test_cleanup_removes_nested_directories() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"original").unwrap();
        let target = dir.path().join("out").join("a").join("p1.tiff");
        let action = action(&source, Some(&target));
        let mut state = RunState::new();
        PageRunner.setup(&action, &mut state).unwrap();
        state.record_launch();
        fs::write(&target, b"partial").unwrap();
        state.advance(Stage::Failed).unwrap();

        PageRunner.cleanup(&action, &mut state).unwrap();

        assert!(!dir.path().join("out").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_commit_requires_execution() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p1.tiff");
        fs::write(&source, b"original").unwrap();
        let action = action(&source, None);
        let mut state = RunState::new();
        PageRunner.setup(&action, &mut state).unwrap();

        let err = PageRunner.commit(&action, &mut state).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Lifecycle);
        assert_eq!(fs::read(&source).unwrap(), b"original");
    }
}
