//! Runner module
//!
//! A runner carries one action through setup, execution and either commit or
//! cleanup. Every stage checks the action's [`RunState`] first, so stages
//! cannot be visited out of order.

mod dirs;
mod page;
mod pdf;
mod process;
mod state;

use crate::actions::Action;
use crate::config::Settings;
use crate::errors::Result;

pub use page::PageRunner;
pub use pdf::PdfRunner;
pub use process::run_tool;
pub use state::{RunState, Stage};

/// Execution strategy for one kind of action
pub trait Runner {
    /// Checks the preconditions of `action` and prepares its target
    fn setup(&self, action: &Action, state: &mut RunState) -> Result<()>;

    /// Runs the external tool, blocking until it exits
    fn execute(&self, action: &Action, settings: &Settings, state: &mut RunState) -> Result<()>;

    /// Makes the output of a successful run final
    fn commit(&self, action: &Action, state: &mut RunState) -> Result<()>;

    /// Removes whatever a failed run left behind
    fn cleanup(&self, action: &Action, state: &mut RunState) -> Result<()>;
}
