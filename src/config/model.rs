//! Settings data structure
//!
//! This module contains the settings shared by every action factory and runner.

use serde::Deserialize;

use crate::constants::{
    CONVERT_PROGRAM, DEFAULT_PAGE_EXTENSION, DEFAULT_PDF_EXTENSION, DEFAULT_UNPACK_RESOLUTION,
    GHOSTSCRIPT_PROGRAM, RESERVED_INFIX, RESERVED_SUBDIRECTORY,
};
use crate::errors::{Result, invalid_value_error};

/// Settings for the bookworm application
///
/// Only the external programs and the batch extensions can be read from a
/// settings file. The reserved names and the unpack resolution are fixed
/// conventions and always take their default values.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Executable run for `convert` invocations
    pub convert_program: String,
    /// Executable run for `gs` invocations
    pub ghostscript_program: String,
    /// Extension of the pages processed when the input is a directory
    pub page_extension: String,
    /// Extension of the documents unpacked when the input is a directory
    pub pdf_extension: String,
    /// Infix marking the temporary output of an in-place transform
    #[serde(skip)]
    pub reserved_infix: String,
    /// Subdirectory receiving unpacked pages by default
    #[serde(skip)]
    pub reserved_subdirectory: String,
    /// Raster resolution of unpacked pages
    #[serde(skip)]
    pub unpack_resolution: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            convert_program: CONVERT_PROGRAM.to_string(),
            ghostscript_program: GHOSTSCRIPT_PROGRAM.to_string(),
            page_extension: DEFAULT_PAGE_EXTENSION.to_string(),
            pdf_extension: DEFAULT_PDF_EXTENSION.to_string(),
            reserved_infix: RESERVED_INFIX.to_string(),
            reserved_subdirectory: RESERVED_SUBDIRECTORY.to_string(),
            unpack_resolution: DEFAULT_UNPACK_RESOLUTION,
        }
    }
}

impl Settings {
    /// Maps a canonical program name onto the configured executable
    ///
    /// Names other than `convert` and `gs` are returned unchanged.
    pub fn program_for<'a>(&'a self, canonical: &'a str) -> &'a str {
        match canonical {
            CONVERT_PROGRAM => &self.convert_program,
            GHOSTSCRIPT_PROGRAM => &self.ghostscript_program,
            other => other,
        }
    }

    /// Validates the settings
    ///
    /// # Errors
    /// Returns a value error if a program or extension is blank
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("convert_program", &self.convert_program),
            ("ghostscript_program", &self.ghostscript_program),
            ("page_extension", &self.page_extension),
            ("pdf_extension", &self.pdf_extension),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(invalid_value_error(name, value, "must not be empty"));
            }
        }

        Ok(())
    }
}
