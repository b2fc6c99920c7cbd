use std::process::exit;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::warn;

use bookworm::cli::{
    get_command_arguments, get_log_file, get_matches, get_settings_path, get_verbosity,
    is_dry_run,
};
use bookworm::logging::{format_failure, init_logger};
use bookworm::privileges::is_superuser;
use bookworm::workflow::{ProcessingOptions, process_command};

fn main() {
    setup_panic!();

    let matches = get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", format_failure(&err));
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    init_logger(get_verbosity(matches), get_log_file(matches).as_deref())?;

    if is_superuser() {
        warn!(
            "You are currently running bookworm as superuser. \
             You really should not run this program with elevated privileges."
        );
    }

    let (operation, args) = get_command_arguments(matches)?;
    let options = ProcessingOptions {
        settings_path: get_settings_path(matches),
        dry_run: is_dry_run(matches),
    };

    process_command(operation, &args, &options)?;

    Ok(())
}
