//! Workflow module
//!
//! This module contains the execution driver and the dispatch of a parsed
//! command to its actions.

mod context;
mod engine;

pub use context::{PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, plan_actions, process_command, run_action, run_actions};
