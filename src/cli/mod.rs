//! CLI argument parsing for webbuild.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! positional command is kept as a plain string and validated by
//! `BuildCommand::parse`, so an unknown command prints the usage text and
//! exits with status 1 like every other failure.

use clap::Parser;
use std::path::PathBuf;

/// Build, publish, watch or run the Flowbite Blazor admin dashboard.
///
/// Before running the dotnet CLI, downloads the Tailwind CSS standalone
/// executable and makes sure a recent enough .NET SDK is available,
/// installing one locally if needed.
#[derive(Parser, Debug)]
#[command(name = "webbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run: build (default), publish, watch, or run.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Config file (default: webbuild.yaml in the current directory, if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments from the process command line.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
