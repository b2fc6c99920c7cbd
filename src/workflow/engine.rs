//! Workflow engine
//!
//! This module contains the execution driver that sequences every action
//! through its runner, and the dispatch of a parsed command to its actions.

use std::path::PathBuf;

use log::{info, warn};

use crate::actions::{Action, CommandArguments, Operation};
use crate::config::resolve_settings;
use crate::errors::Result;
use crate::runner::{RunState, Runner, Stage};

use super::context::{PlannedOperation, WorkflowContext};

/// Options for processing a command
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Explicit settings file, if one was given
    pub settings_path: Option<PathBuf>,
    /// Whether to only plan the actions (true) or run them (false)
    pub dry_run: bool,
}

/// Carries one action through setup, execute and commit
///
/// When execute fails, the runner cleans up before the error is returned.
/// Setup and commit failures are returned as they are: setup changes
/// nothing before its checks pass, and a failed commit must not lose the
/// transformed output.
///
/// # Errors
/// Returns the first error of any stage
pub fn run_action(
    action: &Action,
    runner: &dyn Runner,
    context: &mut WorkflowContext,
) -> Result<RunState> {
    let mut state = RunState::new();

    info!("{}", action.as_terminal_command());
    context.increment_actions_started();

    runner.setup(action, &mut state)?;

    if let Err(err) = runner.execute(action, &context.settings, &mut state) {
        warn!("Rolling back {}: {}", action.name(), action.target().display());
        state.advance(Stage::Failed)?;
        match runner.cleanup(action, &mut state) {
            Ok(()) => context.increment_actions_cleaned_up(),
            Err(cleanup_err) => warn!("Cleanup did not complete: {cleanup_err}"),
        }
        return Err(err);
    }
    context.increment_actions_executed();

    runner.commit(action, &mut state)?;
    context.increment_actions_committed();

    Ok(state)
}

/// Runs every `(action, runner)` pair in order
///
/// The first failing action aborts the run; later actions are not started.
///
/// # Errors
/// Returns the error of the first failing action
pub fn run_actions<'a, 'r, I>(pairs: I, context: &mut WorkflowContext) -> Result<()>
where
    I: IntoIterator<Item = (&'a Action, &'r dyn Runner)>,
{
    for (action, runner) in pairs {
        run_action(action, runner, context)?;
    }

    Ok(())
}

/// Records the actions a run would perform, without touching any file
pub fn plan_actions<'a, I>(actions: I, context: &mut WorkflowContext)
where
    I: IntoIterator<Item = &'a Action>,
{
    for action in actions {
        info!("[dry run] {}", action.as_terminal_command());
        context.add_planned_operation(PlannedOperation::from_action(action));
    }
}

/// Builds and runs the actions of one command
///
/// # Steps
/// 1. Resolve the settings
/// 2. Turn the command arguments into one action or a batch
/// 3. Plan them (dry run) or run them in order
///
/// # Errors
/// * Returns an error if the settings cannot be loaded
/// * Returns an error if the arguments are invalid
/// * Returns the error of the first failing action
pub fn process_command(
    operation: Operation,
    args: &CommandArguments,
    options: &ProcessingOptions,
) -> Result<WorkflowContext> {
    let settings = resolve_settings(options.settings_path.as_deref())?;
    let mut context = WorkflowContext::new(settings, options.dry_run);

    let action_set = operation.process_args(args, &context.settings)?;

    if action_set.is_empty() {
        info!("No matching files for {operation}");
        return Ok(context);
    }

    info!(
        "Processing {} {} action(s){}...",
        action_set.len(),
        operation,
        if options.dry_run { " (dry run)" } else { "" }
    );

    if options.dry_run {
        plan_actions(action_set.actions(), &mut context);
        print_plan(&context);
    } else {
        run_actions(
            action_set
                .actions()
                .into_iter()
                .map(|action| (action, action.runner())),
            &mut context,
        )?;
        info!("Finished {} actions", context.stats.actions_committed);
    }

    Ok(context)
}

fn print_plan(context: &WorkflowContext) {
    println!("\nPlanned commands:");
    println!("=================");
    for op in &context.planned_operations {
        println!("{}", op.command);
    }
    println!("\nTotal operations: {}", context.planned_operations.len());
    println!("Run without --dry-run to execute these commands.");
}
