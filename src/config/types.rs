//! Configuration constants and default values for webbuild.

/// Config file looked up in the working root when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "webbuild.yaml";

// Default value functions for serde
pub(crate) fn default_required_dotnet_version() -> String {
    "9.0".to_string()
}
pub(crate) fn default_tailwind_version() -> String {
    "v3.4.15".to_string()
}
pub(crate) fn default_tools_dir() -> String {
    "src/WebApp/tools".to_string()
}
pub(crate) fn default_dotnet_dir() -> String {
    "./dotnet".to_string()
}
pub(crate) fn default_project_path() -> String {
    "src/WebApp/WebApp.csproj".to_string()
}
pub(crate) fn default_publish_dir() -> String {
    "dist".to_string()
}
