use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Broad category of a failure, independent of its details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing source file or directory, or missing required argument
    NotFound,
    /// Non-positive number or unknown unit name
    Value,
    /// Number that is not an integer
    Type,
    /// Malformed dimension string
    Format,
    /// External converter could not be run or exited with a failure status
    ExternalTool,
    /// Unpack target directory already holds files
    DirectoryOccupied,
    /// Unexpected filesystem failure
    Io,
    /// Unreadable or invalid settings file
    Config,
    /// Runner stage visited out of order
    Lifecycle,
}

/// Custom error type for the bookworm application
#[derive(Debug)]
pub enum Error {
    /// A source file or directory does not exist
    NotFound { path: PathBuf },
    /// A required argument was not supplied
    MissingArgument { name: String },
    /// A numeric argument is not an integer
    InvalidType { name: String, value: String },
    /// A numeric argument or unit name is out of range
    InvalidValue {
        name: String,
        value: String,
        detail: String,
    },
    /// A dimension string is not of the form WIDTHxHEIGHT
    InvalidFormat { value: String, expected: String },
    /// The external tool could not be started
    ToolLaunch { program: String, source: io::Error },
    /// The external tool exited with a failure status
    ToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The unpack target directory is not empty
    DirectoryOccupied { path: PathBuf },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to settings parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// A runner was driven through an illegal stage transition
    Lifecycle { from: String, to: String },
}

impl Error {
    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } | Error::MissingArgument { .. } => ErrorKind::NotFound,
            Error::InvalidType { .. } => ErrorKind::Type,
            Error::InvalidValue { .. } => ErrorKind::Value,
            Error::InvalidFormat { .. } => ErrorKind::Format,
            Error::ToolLaunch { .. } | Error::ToolFailed { .. } => ErrorKind::ExternalTool,
            Error::DirectoryOccupied { .. } => ErrorKind::DirectoryOccupied,
            Error::FileOperation { .. } => ErrorKind::Io,
            Error::ConfigParsing { .. } => ErrorKind::Config,
            Error::Lifecycle { .. } => ErrorKind::Lifecycle,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path } => {
                write!(f, "File or directory does not exist: {}", path.display())
            }
            Error::MissingArgument { name } => {
                write!(f, "Missing required argument: {name}")
            }
            Error::InvalidType { name, value } => {
                write!(f, "'{name}' must be a positive integer. Got: {value}")
            }
            Error::InvalidValue {
                name,
                value,
                detail,
            } => {
                write!(f, "Invalid {name} '{value}': {detail}")
            }
            Error::InvalidFormat { value, expected } => {
                write!(f, "'{value}' needs to be of the form {expected}")
            }
            Error::ToolLaunch { program, .. } => {
                write!(f, "Failed to launch external tool: {program}")
            }
            Error::ToolFailed {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "{program} exited with status {code}")?,
                    None => write!(f, "{program} was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Error::DirectoryOccupied { path } => {
                write!(
                    f,
                    "This directory contains other files: {}. \
                     Unpack PDF will not write to an occupied directory.",
                    path.display()
                )
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Settings parsing error: {detail}")
            }
            Error::Lifecycle { from, to } => {
                write!(f, "Illegal runner transition from {from} to {to}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ToolLaunch { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the bookworm application
///
/// # Examples
/// ```
/// use bookworm::prelude::{Result, not_found_error};
///
/// fn example_function(exists: bool) -> Result<String> {
///     if exists {
///         Ok("page.tiff".to_string())
///     } else {
///         Err(not_found_error("page.tiff".into()))
///     }
/// }
/// # assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a not-found error
pub fn not_found_error(path: PathBuf) -> Error {
    Error::NotFound { path }
}

/// Helper function to create a missing argument error
pub fn missing_argument_error(name: &str) -> Error {
    Error::MissingArgument {
        name: name.to_string(),
    }
}

/// Helper function to create a non-integer error
pub fn invalid_type_error(name: &str, value: &str) -> Error {
    Error::InvalidType {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Helper function to create an out-of-range error
pub fn invalid_value_error(name: &str, value: &str, detail: &str) -> Error {
    Error::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a malformed input error
pub fn invalid_format_error(value: &str, expected: &str) -> Error {
    Error::InvalidFormat {
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Helper function to create a tool launch error
pub fn tool_launch_error(err: io::Error, program: &str) -> Error {
    Error::ToolLaunch {
        program: program.to_string(),
        source: err,
    }
}

/// Helper function to create a tool failure error
pub fn tool_failed_error(program: &str, code: Option<i32>, stderr: &str) -> Error {
    Error::ToolFailed {
        program: program.to_string(),
        code,
        stderr: stderr.trim().to_string(),
    }
}

/// Helper function to create an occupied directory error
pub fn directory_occupied_error(path: PathBuf) -> Error {
    Error::DirectoryOccupied { path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a settings parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a lifecycle error
pub fn lifecycle_error(from: impl fmt::Debug, to: impl fmt::Debug) -> Error {
    Error::Lifecycle {
        from: format!("{from:?}"),
        to: format!("{to:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = not_found_error(PathBuf::from("/scans/p1.tiff"));

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(
            format!("{error}").contains("/scans/p1.tiff"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_missing_argument_is_not_found() {
        let error = missing_argument_error("resolution");

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(format!("{error}").contains("resolution"));
    }

    #[test]
    fn test_validation_error_kinds() {
        assert_eq!(
            invalid_type_error("resolution", "2.5").kind(),
            ErrorKind::Type
        );
        assert_eq!(
            invalid_value_error("resolution", "-1", "must be positive").kind(),
            ErrorKind::Value
        );
        assert_eq!(
            invalid_format_error("10by20", "WIDTHxHEIGHT").kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_tool_failed_error() {
        let error = tool_failed_error("convert", Some(1), "convert: no images defined\n");
        let error_string = format!("{error}");

        assert_eq!(error.kind(), ErrorKind::ExternalTool);
        assert!(error_string.contains("status 1"));
        assert!(
            error_string.ends_with("no images defined"),
            "Stderr should be trimmed and appended"
        );
    }

    #[test]
    fn test_tool_launch_error_keeps_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file");
        let error = tool_launch_error(io_error, "gs");

        assert_eq!(error.kind(), ErrorKind::ExternalTool);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_directory_occupied_error() {
        let error = directory_occupied_error(PathBuf::from("book/__bookworm__"));

        assert_eq!(error.kind(), ErrorKind::DirectoryOccupied);
        assert!(format!("{error}").contains("book/__bookworm__"));
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(
            format!("{error}").contains("Failed to perform operation on file"),
            "Error message should describe the failed operation"
        );
    }
}
