//! Command implementations for webbuild.
//!
//! Each command is one invocation of the dotnet CLI against the configured
//! project. `build` and `publish` must succeed; `watch` and `run` are
//! long-lived development servers whose exit status is not judged. A Ctrl+C
//! during any of them ends the build cleanly.


use crate::config::Config;
use crate::context::BuildContext;
use crate::download::Downloader;
use crate::error::{BuildError, Result};
use crate::platform::Platform;
use crate::process::{Invocation, ProcessRunner, RunOutcome};
use crate::toolchain::{self, DotnetSdk};
use std::fmt;
use std::path::Path;

/// A build command accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildCommand {
    /// Compile the project (default).
    #[default]
    Build,
    /// Release build copied to the publish directory.
    Publish,
    /// Run with hot reload.
    Watch,
    /// Run without hot reload.
    Run,
}

impl BuildCommand {
    /// All commands in usage order.
    pub const ALL: [BuildCommand; 4] = [
        BuildCommand::Build,
        BuildCommand::Publish,
        BuildCommand::Watch,
        BuildCommand::Run,
    ];

    /// Parse the optional positional argument; absent means `build`.
    pub fn parse(arg: Option<&str>) -> Result<Self> {
        match arg {
            None => Ok(BuildCommand::default()),
            Some(name) => Self::ALL
                .into_iter()
                .find(|command| command.name() == name)
                .ok_or_else(|| BuildError::UnknownCommand(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuildCommand::Build => "build",
            BuildCommand::Publish => "publish",
            BuildCommand::Watch => "watch",
            BuildCommand::Run => "run",
        }
    }

    /// Whether a non-zero exit of the dotnet CLI fails the build.
    pub fn is_checked(self) -> bool {
        matches!(self, BuildCommand::Build | BuildCommand::Publish)
    }

    /// The dotnet CLI invocation for this command.
    pub fn invocation(self, sdk: &DotnetSdk, config: &Config) -> Invocation {
        let dotnet = Invocation::new(sdk.command.as_str());
        let project = config.project_path.as_str();
        match self {
            BuildCommand::Build => dotnet.args(["build", project]),
            BuildCommand::Publish => dotnet.args([
                "publish",
                project,
                "-c",
                "Release",
                "-o",
                config.publish_dir.as_str(),
            ]),
            BuildCommand::Watch => dotnet.args(["watch", "--project", project]),
            BuildCommand::Run => dotnet.args(["run", "--project", project]),
        }
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Usage text listing the accepted commands.
pub fn usage() -> &'static str {
    "Usage: webbuild [build|publish|watch|run] [--config <PATH>]\n\
     \x20 build   - Build the project (default)\n\
     \x20 publish - Publish the project to ./dist (or the configured publish_dir)\n\
     \x20 watch   - Run with hot reload\n\
     \x20 run     - Run the project"
}

/// Prefix a relative directory with `./` for messages.
fn display_dir(dir: &str) -> String {
    if dir.starts_with('.') || Path::new(dir).is_absolute() {
        dir.to_string()
    } else {
        format!("./{}", dir)
    }
}

/// Prepare the environment, then run the command.
pub fn execute(
    command: BuildCommand,
    ctx: &BuildContext,
    platform: Platform,
    runner: &dyn ProcessRunner,
    downloader: &dyn Downloader,
) -> Result<()> {
    let sdk = toolchain::prepare(ctx, platform, runner, downloader)?;
    tracing::debug!(
        command = %sdk.command,
        version = %sdk.version,
        source = ?sdk.source,
        "selected .NET SDK"
    );
    run_command(command, &sdk, &ctx.config, runner)
}

/// Run one dotnet CLI command with the selected SDK.
pub fn run_command(
    command: BuildCommand,
    sdk: &DotnetSdk,
    config: &Config,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let publish_dir = display_dir(&config.publish_dir);

    match command {
        BuildCommand::Build => println!("Building project..."),
        BuildCommand::Publish => println!("Publishing project to {}...", publish_dir),
        BuildCommand::Watch => {
            println!("Starting project with hot reload...");
            println!("Press Ctrl+C to stop watching...");
        }
        BuildCommand::Run => {
            println!("Running project...");
            println!("Press Ctrl+C to stop...");
        }
    }

    let invocation = command.invocation(sdk, config);
    let outcome = runner.run(&invocation).map_err(|e| {
        tracing::warn!(error = %e, "could not start dotnet");
        BuildError::CommandFailed(command.name().to_string())
    })?;

    match outcome {
        RunOutcome::Interrupted => {
            println!("\n\nShutdown requested. Exiting cleanly...");
            Ok(())
        }
        RunOutcome::Exited(code) if command.is_checked() && !outcome.is_success() => {
            tracing::debug!(command = %invocation, ?code, "dotnet failed");
            Err(BuildError::CommandFailed(command.name().to_string()))
        }
        RunOutcome::Exited(_) => {
            match command {
                BuildCommand::Build => println!("Successfully built project"),
                BuildCommand::Publish => println!("Successfully published to {}", publish_dir),
                BuildCommand::Watch | BuildCommand::Run => {}
            }
            Ok(())
        }
    }
}
