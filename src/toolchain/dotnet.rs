//! .NET SDK detection and local installation.

use crate::context::BuildContext;
use crate::download::Downloader;
use crate::error::{BuildError, Result};
use crate::fs::make_executable;
use crate::platform::Platform;
use crate::process::{Invocation, ProcessRunner, RunOutcome};
use crate::version::{major_minor, version_greater_equal};

/// Command name of the SDK when it comes from `PATH`.
pub const SYSTEM_DOTNET: &str = "dotnet";

/// Installer for Unix-like systems.
const INSTALL_SCRIPT_SH_URL: &str = "https://dot.net/v1/dotnet-install.sh";
const INSTALL_SCRIPT_SH: &str = "dotnet-install.sh";

/// Installer for Windows.
const INSTALL_SCRIPT_PS1_URL: &str = "https://dot.net/v1/dotnet-install.ps1";
const INSTALL_SCRIPT_PS1: &str = "dotnet-install.ps1";

/// Where the SDK in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkSource {
    System,
    Local,
}

/// The .NET SDK selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetSdk {
    /// Program to execute: `dotnet` or the path of the local install.
    pub command: String,
    /// Version string the SDK reported.
    pub version: String,
    pub source: SdkSource,
}

/// Query `dotnet --version` on `PATH`.
///
/// A missing executable and a non-zero exit both yield `None`.
pub fn system_dotnet_version(runner: &dyn ProcessRunner) -> Option<String> {
    match runner.capture(&Invocation::new(SYSTEM_DOTNET).arg("--version")) {
        Ok(output) if !output.stdout.is_empty() => Some(output.stdout),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "system dotnet unavailable");
            None
        }
    }
}

/// Use the system SDK if it is present and new enough.
pub fn check_system_dotnet(ctx: &BuildContext, runner: &dyn ProcessRunner) -> Option<DotnetSdk> {
    let required = &ctx.config.required_dotnet_version;

    let Some(version) = system_dotnet_version(runner) else {
        println!("No system .NET installation found");
        return None;
    };

    println!("Found .NET version: {}", version);
    let current = major_minor(&version);

    if version_greater_equal(&current, required) {
        println!("Using system-installed .NET {}", version);
        Some(DotnetSdk {
            command: SYSTEM_DOTNET.to_string(),
            version,
            source: SdkSource::System,
        })
    } else {
        println!(
            "System .NET version {} is older than required version {}",
            current, required
        );
        None
    }
}

/// Install the required SDK channel into `dotnet_dir` and verify it.
///
/// Fetches Microsoft's `dotnet-install` script into the working root and
/// runs it. Every failure along the way is an `InstallError`.
pub fn install_dotnet(
    ctx: &BuildContext,
    platform: Platform,
    runner: &dyn ProcessRunner,
    downloader: &dyn Downloader,
) -> Result<DotnetSdk> {
    let required = ctx.config.required_dotnet_version.as_str();
    let install_dir = ctx.config.dotnet_dir.as_str();
    println!("Installing .NET {}...", required);

    let failed = |e: BuildError| BuildError::InstallError(e.to_string());

    let installer = if platform.is_windows() {
        let script = ctx.root_file(INSTALL_SCRIPT_PS1);
        downloader
            .download("the .NET install script", INSTALL_SCRIPT_PS1_URL, &script)
            .map_err(failed)?;

        Invocation::new("powershell").args([
            "-ExecutionPolicy",
            "Bypass",
            "-File",
            INSTALL_SCRIPT_PS1,
            "-Channel",
            required,
            "-InstallDir",
            install_dir,
        ])
    } else {
        let script = ctx.root_file(INSTALL_SCRIPT_SH);
        downloader
            .download("the .NET install script", INSTALL_SCRIPT_SH_URL, &script)
            .map_err(failed)?;
        make_executable(&script).map_err(failed)?;

        Invocation::new(script.to_string_lossy()).args([
            "-c",
            required,
            "-InstallDir",
            install_dir,
        ])
    };

    match runner.run(&installer).map_err(failed)? {
        outcome if outcome.is_success() => {}
        RunOutcome::Exited(code) => {
            return Err(BuildError::InstallError(format!(
                "{} exited with {}",
                installer,
                code.map_or_else(|| "a signal".to_string(), |c| format!("code {}", c))
            )));
        }
        RunOutcome::Interrupted => {
            return Err(BuildError::InstallError(
                "installation was interrupted".to_string(),
            ));
        }
    }

    let local = ctx
        .dotnet_dir()
        .join(platform.executable_name(SYSTEM_DOTNET));
    let command = local.to_string_lossy().into_owned();

    let output = runner
        .capture(&Invocation::new(command.as_str()).arg("--version"))
        .map_err(failed)?;

    println!("Using .NET version: {}", output.stdout);
    Ok(DotnetSdk {
        command,
        version: output.stdout,
        source: SdkSource::Local,
    })
}

/// Pick the system SDK or fall back to a local install.
pub fn resolve_dotnet(
    ctx: &BuildContext,
    platform: Platform,
    runner: &dyn ProcessRunner,
    downloader: &dyn Downloader,
) -> Result<DotnetSdk> {
    match check_system_dotnet(ctx, runner) {
        Some(sdk) => Ok(sdk),
        None => install_dotnet(ctx, platform, runner, downloader),
    }
}
