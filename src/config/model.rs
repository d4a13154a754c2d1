//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a webbuild run.
///
/// Paths are relative to the working root. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Toolchain versions
    // =========================================================================
    /// Minimum .NET SDK as `major.minor`; also the install channel.
    #[serde(default = "default_required_dotnet_version")]
    pub required_dotnet_version: String,

    /// Tailwind CSS release tag (e.g. `v3.4.15`).
    #[serde(default = "default_tailwind_version")]
    pub tailwind_version: String,

    // =========================================================================
    // Layout
    // =========================================================================
    /// Directory holding the downloaded Tailwind CSS executable.
    #[serde(default = "default_tools_dir")]
    pub tools_dir: String,

    /// Install directory for a local .NET SDK.
    #[serde(default = "default_dotnet_dir")]
    pub dotnet_dir: String,

    /// Project file passed to every dotnet CLI invocation.
    #[serde(default = "default_project_path")]
    pub project_path: String,

    /// Output directory for `publish`.
    #[serde(default = "default_publish_dir")]
    pub publish_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_dotnet_version: default_required_dotnet_version(),
            tailwind_version: default_tailwind_version(),
            tools_dir: default_tools_dir(),
            dotnet_dir: default_dotnet_dir(),
            project_path: default_project_path(),
            publish_dir: default_publish_dir(),
        }
    }
}
