//! Tailwind CSS standalone executable download.

use crate::context::BuildContext;
use crate::download::Downloader;
use crate::error::{BuildError, Result};
use crate::fs::make_executable;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Ensure the Tailwind CSS executable exists in the tools directory.
///
/// Idempotent: if the file is already there nothing is downloaded. Any
/// failure is a `DownloadError`; there is no retry.
///
/// Returns the absolute path of the executable.
pub fn setup_tailwind(
    ctx: &BuildContext,
    platform: Platform,
    downloader: &dyn Downloader,
) -> Result<PathBuf> {
    let descriptor = platform.tailwind_descriptor(&ctx.config.tailwind_version);
    let tools_dir = ctx.tools_dir();
    let tailwind_path = tools_dir.join(&descriptor.exec_name);
    let display_path = Path::new(&ctx.config.tools_dir).join(&descriptor.exec_name);

    if tailwind_path.exists() {
        println!(
            "Tailwind CSS executable already exists at {}",
            display_path.display()
        );
        return Ok(tailwind_path);
    }

    println!(
        "Downloading Tailwind CSS executable for {}...",
        descriptor.os_name
    );

    let failed = |reason: String| BuildError::DownloadError {
        what: "Tailwind CSS".to_string(),
        reason,
    };

    std::fs::create_dir_all(&tools_dir).map_err(|e| {
        failed(format!(
            "failed to create tools directory '{}': {}",
            tools_dir.display(),
            e
        ))
    })?;

    downloader.download("Tailwind CSS", &descriptor.url, &tailwind_path)?;

    if !platform.is_windows() {
        make_executable(&tailwind_path).map_err(|e| failed(e.to_string()))?;
    }

    println!(
        "Tailwind CSS executable downloaded to {}",
        display_path.display()
    );
    Ok(tailwind_path)
}
