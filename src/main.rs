//! Binary entrypoint for the `testid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match testid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
