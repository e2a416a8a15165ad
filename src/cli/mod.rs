//! Command-line interface layer.
//!
//! Commands return a [`CommandResult`]; printing is done by `report` so the
//! pipeline stays usable as a library.

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use commands::CommandResult;
pub use exit_status::ExitStatus;
pub use logging::init_tracing;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status)
}
