//! Runner for unpacking PDFs with ghostscript

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::actions::Action;
use crate::config::Settings;
use crate::errors::{Result, directory_occupied_error, file_operation_error, not_found_error};

use super::dirs::{create_missing_dirs, remove_empty_dirs};
use super::process::run_tool;
use super::state::{RunState, Stage};
use super::Runner;

/// Runs `UnpackPdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRunner;

impl Runner for PdfRunner {
    fn setup(&self, action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Created)?;

        if !action.source().is_file() {
            return Err(not_found_error(action.source().to_path_buf()));
        }

        if let Some(created) = create_missing_dirs(action.target())? {
            state.record_created_directory(&created);
        }

        state.advance(Stage::Setup)
    }

    /// Refuses to write into a directory that already holds files
    ///
    /// The check happens here rather than in setup so that files appearing
    /// in between are caught as well.
    fn execute(&self, action: &Action, settings: &Settings, state: &mut RunState) -> Result<()> {
        state.require(Stage::Setup)?;

        let target_dir = action.target();
        if !directory_entries(target_dir)?.is_empty() {
            return Err(directory_occupied_error(target_dir.to_path_buf()));
        }

        state.record_launch();
        run_tool(action, settings)?;
        state.advance(Stage::Executed)
    }

    fn commit(&self, _action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Executed)?;
        state.advance(Stage::Committed)
    }

    /// Removes the pages written by a failed run, then the directory
    ///
    /// When the tool never started, the directory is only removed if setup
    /// created it, and only while it is empty. Parents that setup created
    /// go the same way.
    fn cleanup(&self, action: &Action, state: &mut RunState) -> Result<()> {
        state.require(Stage::Failed)?;

        let target_dir = action.target();
        if state.launched() && target_dir.is_dir() {
            let written = directory_entries(target_dir)?;
            debug!(
                "Removing {} unpacked pages from {}",
                written.len(),
                target_dir.display()
            );
            fs_extra::remove_items(&written).map_err(|e| {
                file_operation_error(std::io::Error::other(e), target_dir.to_path_buf(), "remove")
            })?;
            fs::remove_dir(target_dir)
                .map_err(|e| file_operation_error(e, target_dir.to_path_buf(), "remove"))?;
        }

        if let Some(top) = state.created_directory() {
            remove_empty_dirs(target_dir, top)?;
        }

        state.advance(Stage::CleanedUp)
    }
}

fn directory_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| file_operation_error(e, dir.to_path_buf(), "read"))?;

    entries
        .map(|entry| {
            entry
                .map(|entry| entry.path())
                .map_err(|e| file_operation_error(e, dir.to_path_buf(), "read"))
        })
        .collect()
}
