//! webbuild: build orchestrator for the Flowbite Blazor admin dashboard.
//!
//! This is the main entry point for the `webbuild` CLI. It parses arguments,
//! validates the command, prepares the toolchain, runs the dotnet CLI, and
//! maps the result to an exit code.

mod cli;
mod commands;
mod config;
mod context;
mod download;
mod error;
mod exit_codes;
mod fs;
mod interrupt;
mod logging;
mod platform;
mod process;
mod toolchain;
mod version;

#[cfg(test)]
mod test_support;

use cli::Cli;
use commands::BuildCommand;
use context::BuildContext;
use download::HttpDownloader;
use error::{BuildError, Result};
use platform::Platform;
use process::SystemRunner;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };

    logging::init();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            if matches!(err, BuildError::UnknownCommand(_)) {
                eprintln!("{}", commands::usage());
            }

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Reject unknown commands before anything is read, downloaded or installed.
    let command = BuildCommand::parse(cli.command.as_deref())?;
    let ctx = BuildContext::resolve(cli.config.as_deref())?;

    let platform = Platform::current()?;
    let runner = SystemRunner::new(&ctx.root);
    let downloader = HttpDownloader::new();

    commands::execute(command, &ctx, platform, &runner, &downloader)
}
