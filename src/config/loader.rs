//! Settings loading functionality
//!
//! This module contains functions for locating, loading and validating settings.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde_yaml::from_str;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER, SETTINGS_FILE_NAME};
use crate::errors::{Result, config_parsing_error, file_operation_error, not_found_error};

use super::model::Settings;

/// Loads settings from a YAML file
///
/// # Arguments
/// * `file` - Path to the settings file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings or an error
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML, or holds
/// invalid values
pub fn load_settings(file: &Path) -> Result<Settings> {
    if !file.is_file() {
        return Err(not_found_error(file.to_path_buf()));
    }

    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse settings file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    settings.validate()?;

    debug!("Loaded settings from {}", file.display());

    Ok(settings)
}

/// Location of the settings file in the platform configuration directory
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|folder| folder.config_dir().join(SETTINGS_FILE_NAME))
}

/// Resolves the settings for a run
///
/// An explicit file must exist. Without one, the file in the platform
/// configuration directory is used when present, otherwise the defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(file) = explicit {
        return load_settings(file);
    }

    match default_settings_path() {
        Some(file) if file.is_file() => load_settings(&file),
        _ => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
