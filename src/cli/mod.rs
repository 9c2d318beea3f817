use anyhow::Result;
use clap::{CommandFactory, error::ErrorKind};

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, normalize_legacy_flags};
pub use exit_status::ExitStatus;
pub use run::{RunOutcome, config_from_args};

/// Run the generator for parsed arguments and print the outcome.
///
/// Configuration problems print a usage error and yield
/// [`ExitStatus::Error`]; I/O failures are returned as `Err`.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            Arguments::command()
                .error(ErrorKind::ArgumentConflict, format!("{:#}", err))
                .print()?;
            return Ok(ExitStatus::Error);
        }
    };

    let outcome = run::run(config, args.if_stale)?;
    report::print(&outcome, args.verbose);

    Ok(ExitStatus::of(&outcome))
}
