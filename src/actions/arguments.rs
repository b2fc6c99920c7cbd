//! Arguments handed to the action factories
//!
//! The command line is reduced to this plain structure before any action is
//! built, so the factories never depend on the argument parser.

use std::path::PathBuf;

use crate::errors::{Result, missing_argument_error};
use crate::utils::expand_path;

/// Raw values supplied for one subcommand
///
/// Every field is optional here; each action decides which ones it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArguments {
    pub input: Option<String>,
    pub output: Option<String>,
    pub resolution: Option<String>,
    pub units: Option<String>,
    pub dimensions: Option<String>,
    pub extension: Option<String>,
}

impl CommandArguments {
    /// Arguments for `input`, with every other field unset
    pub fn for_input(input: &str) -> Self {
        CommandArguments {
            input: Some(input.to_string()),
            ..CommandArguments::default()
        }
    }

    /// The input path, with `~` expanded
    ///
    /// # Errors
    /// Returns a not-found error if no input was given
    pub fn input_path(&self) -> Result<PathBuf> {
        required("input", &self.input).map(expand_path)
    }

    /// The output path, with `~` expanded, if one was given
    pub fn output_path(&self) -> Option<PathBuf> {
        present(&self.output).map(expand_path)
    }

    pub fn resolution(&self) -> Result<&str> {
        required("resolution", &self.resolution)
    }

    pub fn units(&self) -> Result<&str> {
        required("units", &self.units)
    }

    pub fn dimensions(&self) -> Result<&str> {
        required("dimensions", &self.dimensions)
    }

    /// The extension filter, falling back to `default`
    pub fn extension_or<'a>(&'a self, default: &'a str) -> &'a str {
        present(&self.extension).unwrap_or(default)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn required<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str> {
    present(value).ok_or_else(|| missing_argument_error(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_missing_arguments_are_not_found() {
        let args = CommandArguments::default();

        assert_eq!(args.input_path().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(args.resolution().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(args.units().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(args.dimensions().unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_empty_output_is_absent() {
        let args = CommandArguments {
            output: Some(String::new()),
            ..CommandArguments::for_input("p1.tiff")
        };

        assert_eq!(args.output_path(), None);
        assert_eq!(args.input_path().unwrap(), PathBuf::from("p1.tiff"));
    }

    #[test]
    fn test_extension_fallback() {
        let mut args = CommandArguments::for_input("scans");
        assert_eq!(args.extension_or("tiff"), "tiff");

        args.extension = Some("png".to_string());
        assert_eq!(args.extension_or("tiff"), "png");
    }
}
