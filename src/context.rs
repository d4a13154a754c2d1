//! Working-root resolution for webbuild.
//!
//! Everything the build touches is addressed relative to the directory it
//! was started from, the same directory the dotnet CLI runs in. This module
//! pairs that root with the loaded config and turns configured relative
//! paths into absolute ones for filesystem checks.

use crate::config::Config;
use crate::error::{BuildError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved root and configuration for one run.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Absolute working root. Child processes run here.
    pub root: PathBuf,

    /// Loaded configuration.
    pub config: Config,
}

impl BuildContext {
    /// Resolve the context from the current working directory.
    ///
    /// * `config_path` - explicit config file, relative to the root unless absolute
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            BuildError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let config = Config::resolve(&cwd, config_path)?;
        Ok(Self::new(cwd, config))
    }

    pub fn new<P: AsRef<Path>>(root: P, config: Config) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Absolute path of the Tailwind tools directory.
    pub fn tools_dir(&self) -> PathBuf {
        self.root.join(&self.config.tools_dir)
    }

    /// Absolute path of the local .NET SDK install directory.
    pub fn dotnet_dir(&self) -> PathBuf {
        self.root.join(&self.config.dotnet_dir)
    }

    /// Absolute path of a file directly in the working root.
    pub fn root_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_joined_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = BuildContext::new(temp_dir.path(), Config::default());

        assert_eq!(
            ctx.tools_dir(),
            temp_dir.path().join("src/WebApp/tools")
        );
        assert_eq!(ctx.dotnet_dir(), temp_dir.path().join("./dotnet"));
        assert_eq!(
            ctx.root_file("dotnet-install.sh"),
            temp_dir.path().join("dotnet-install.sh")
        );
    }

    #[test]
    fn test_configured_paths_are_used() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            tools_dir: "tools".to_string(),
            dotnet_dir: ".sdk".to_string(),
            ..Config::default()
        };
        let ctx = BuildContext::new(temp_dir.path(), config);

        assert_eq!(ctx.tools_dir(), temp_dir.path().join("tools"));
        assert_eq!(ctx.dotnet_dir(), temp_dir.path().join(".sdk"));
    }
}
