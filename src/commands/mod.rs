//! Command dispatch and handlers.

pub mod generate;

use crate::adapters::live::LiveIdGenerator;
use crate::cli::Cli;

/// Dispatch the parsed CLI to the generate handler, wired with the live
/// generator.
///
/// # Errors
///
/// Returns an error string if the handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    generate::run(cli.kind, cli.number, &LiveIdGenerator::new())
}
