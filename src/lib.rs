//! Page-level transformations of scanned books
//!
//! Every transformation is an [`actions::Action`] describing one invocation
//! of `convert` or `gs`. A [`runner::Runner`] carries the action through
//! setup, execution and commit, or cleans up after a failure, and the
//! [`workflow`] driver runs single actions or whole directories in order.

pub mod actions;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod privileges;
pub mod runner;
pub mod utils;
pub mod values;
pub mod workflow;

pub mod prelude {
    pub use crate::actions::{Action, ActionSet, CommandArguments, Operation};
    pub use crate::config::{Settings, resolve_settings};
    pub use crate::discovery::{FileListing, list_directory, with_extension};
    pub use crate::errors::{
        config_parsing_error, directory_occupied_error, file_operation_error,
        invalid_format_error, invalid_type_error, invalid_value_error, lifecycle_error,
        missing_argument_error, not_found_error, tool_failed_error, tool_launch_error,
    };
    pub use crate::errors::{Error, ErrorKind, Result};
    pub use crate::logging::{LogLevel, format_failure, format_message, init_logger};
    pub use crate::runner::{PageRunner, PdfRunner, RunState, Runner, Stage};
    pub use crate::values::{
        Dimensions, Resolution, ResolutionUnits, make_dimensions, make_resolution,
        parse_dimensions,
    };
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, process_command, run_actions};
}
