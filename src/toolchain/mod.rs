//! Build environment preparation.
//!
//! Two prerequisites must exist before any dotnet command runs:
//!
//! 1. The standalone Tailwind CSS executable in the tools directory, which
//!    the project's MSBuild targets invoke to compile stylesheets.
//! 2. A .NET SDK at least as new as `required_dotnet_version`, taken from
//!    `PATH` when possible and installed into `dotnet_dir` otherwise.
//!
//! Both are cached on disk: a present Tailwind binary or a usable SDK
//! short-circuits the download or install.

mod dotnet;
mod tailwind;


use crate::context::BuildContext;
use crate::download::Downloader;
use crate::error::Result;
use crate::platform::Platform;
use crate::process::ProcessRunner;

pub use dotnet::{
    DotnetSdk, SdkSource, check_system_dotnet, install_dotnet, resolve_dotnet,
    system_dotnet_version,
};
pub use tailwind::setup_tailwind;

/// Make sure Tailwind CSS and a suitable .NET SDK are available.
///
/// Returns the SDK every dotnet command should be run with.
pub fn prepare(
    ctx: &BuildContext,
    platform: Platform,
    runner: &dyn ProcessRunner,
    downloader: &dyn Downloader,
) -> Result<DotnetSdk> {
    println!("Setting up build environment...");
    setup_tailwind(ctx, platform, downloader)?;
    resolve_dotnet(ctx, platform, runner, downloader)
}
