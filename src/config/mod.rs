//! Configuration module
//!
//! This module contains the settings passed explicitly into the action
//! factories and runners, and the loader that reads them from YAML.

mod loader;
mod model;

pub use loader::{default_settings_path, load_settings, resolve_settings};
pub use model::Settings;
