//! Invocation of the external tools

use std::process::Command;

use log::{debug, trace};

use crate::actions::Action;
use crate::config::Settings;
use crate::errors::{Result, tool_failed_error, tool_launch_error};

/// Runs the external tool for `action` and waits for it to exit
///
/// The canonical program name of the action is replaced by the executable
/// configured in `settings`.
///
/// # Errors
/// * Returns an external tool error if the program cannot be started
/// * Returns an external tool error carrying stderr if it exits unsuccessfully
pub fn run_tool(action: &Action, settings: &Settings) -> Result<()> {
    let program = settings.program_for(action.program());
    let args = action.as_os_args().into_iter().skip(1);

    trace!("Spawning {program}");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| tool_launch_error(e, program))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        debug!("{program}: {}", stderr.trim_end());
    }

    if output.status.success() {
        Ok(())
    } else {
        Err(tool_failed_error(program, output.status.code(), &stderr))
    }
}
