use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::actions::{CommandArguments, Operation};
use crate::constants::{
    CHANGE_RESOLUTION_ABOUT, CONFIG_HELP, DIMENSIONS_HELP, DRY_RUN_HELP, EXPAND_PAGE_ABOUT,
    EXTENSION_HELP, INPUT_HELP, LOG_FILE_HELP, OUTPUT_HELP, RESAMPLE_PAGE_ABOUT, RESOLUTION_HELP,
    UNITS_HELP, UNPACK_PDF_ABOUT, VERBOSE_HELP,
};
use crate::errors::{Result, missing_argument_error};
use crate::logging::LogLevel;
use crate::utils::expand_path;

/// Builds the command-line definition
///
/// Global options:
/// - `config`: Path to a settings file
/// - `dry_run`: Print the commands without running them
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write the log to a file
///
/// Values of the subcommands are checked by the action factories rather
/// than by clap, so that invalid input is reported with the same errors
/// whichever way the actions are built.
pub fn build_command() -> Command {
    // define arg for reading from a specific settings file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true);

    // define arg for dry run
    let arg_dry = Arg::new("dry_run")
        .short('n')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue)
        .global(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count)
        .global(true);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_log_file)
        .arg(arg_verbose)
        .subcommand(subcommand(Operation::UnpackPdf, UNPACK_PDF_ABOUT))
        .subcommand(
            subcommand(Operation::ChangeResolution, CHANGE_RESOLUTION_ABOUT)
                .arg(resolution_arg())
                .arg(units_arg()),
        )
        .subcommand(
            subcommand(Operation::ResamplePage, RESAMPLE_PAGE_ABOUT)
                .arg(resolution_arg())
                .arg(units_arg()),
        )
        .subcommand(
            subcommand(Operation::ExpandPage, EXPAND_PAGE_ABOUT).arg(
                Arg::new("dimensions")
                    .short('d')
                    .long("dimensions")
                    .help(DIMENSIONS_HELP)
                    .allow_hyphen_values(true),
            ),
        )
}

/// Parses the process arguments
///
/// Usage errors make clap print its message and exit with status 2.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

fn subcommand(operation: Operation, about: &'static str) -> Command {
    Command::new(operation.as_str())
        .about(about)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help(INPUT_HELP),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(OUTPUT_HELP),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .help(EXTENSION_HELP),
        )
}

fn resolution_arg() -> Arg {
    Arg::new("resolution")
        .short('r')
        .long("resolution")
        .help(RESOLUTION_HELP)
        .allow_hyphen_values(true)
}

fn units_arg() -> Arg {
    Arg::new("units")
        .short('u')
        .long("units")
        .help(UNITS_HELP)
}

/// Gets the verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// The log file requested with `--log-file`, with `~` expanded
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .map(|file| expand_path(file))
}

/// The settings file requested with `--config`, with `~` expanded
pub fn get_settings_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("config")
        .map(|file| expand_path(file))
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry_run")
}

/// Extracts the chosen operation and its raw arguments
///
/// # Errors
/// Returns an error if no known subcommand was given
pub fn get_command_arguments(matches: &ArgMatches) -> Result<(Operation, CommandArguments)> {
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| missing_argument_error("command"))?;
    let operation: Operation = name.parse()?;

    let value = |id: &str| -> Option<String> {
        sub_matches
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .cloned()
    };

    let args = CommandArguments {
        input: value("input"),
        output: value("output"),
        resolution: value("resolution"),
        units: value("units"),
        dimensions: value("dimensions"),
        extension: value("extension"),
    };

    Ok((operation, args))
}
