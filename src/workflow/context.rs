//! Workflow context
//!
//! This module defines the state carried through one command run.

use std::path::PathBuf;

use crate::actions::Action;
use crate::config::Settings;

/// An action that a dry run would have executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// Subcommand name of the action
    pub operation: &'static str,
    /// The file read by the external tool
    pub source: PathBuf,
    /// The file or directory written by the external tool
    pub target: PathBuf,
    /// Shell equivalent of the invocation
    pub command: String,
}

impl PlannedOperation {
    pub fn from_action(action: &Action) -> Self {
        PlannedOperation {
            operation: action.name(),
            source: action.source().to_path_buf(),
            target: action.target().to_path_buf(),
            command: action.as_terminal_command(),
        }
    }
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The settings every action of the run was built with
    pub settings: Settings,
    /// Whether to only plan the actions instead of running them
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of actions started
    pub actions_started: usize,
    /// Number of actions whose tool ran successfully
    pub actions_executed: usize,
    /// Number of actions committed
    pub actions_committed: usize,
    /// Number of actions rolled back after a failure
    pub actions_cleaned_up: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(settings: Settings, dry_run: bool) -> Self {
        WorkflowContext {
            settings,
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
        }
    }

    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    pub fn increment_actions_started(&mut self) {
        self.stats.actions_started += 1;
    }

    pub fn increment_actions_executed(&mut self) {
        self.stats.actions_executed += 1;
    }

    pub fn increment_actions_committed(&mut self) {
        self.stats.actions_committed += 1;
    }

    pub fn increment_actions_cleaned_up(&mut self) {
        self.stats.actions_cleaned_up += 1;
    }
}
