//! Config loading and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{BuildError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BuildError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BuildError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `webbuild.yaml` in `root`
    /// is used when present and the defaults otherwise.
    pub fn resolve<P: AsRef<Path>>(root: P, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(root.as_ref().join(path)),
            None => {
                let path = root.as_ref().join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BuildError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - no field may be empty
    /// - `required_dotnet_version` must be `major.minor` digits
    /// - `tailwind_version` must be a release tag starting with `v`
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("required_dotnet_version", &self.required_dotnet_version),
            ("tailwind_version", &self.tailwind_version),
            ("tools_dir", &self.tools_dir),
            ("dotnet_dir", &self.dotnet_dir),
            ("project_path", &self.project_path),
            ("publish_dir", &self.publish_dir),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(BuildError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        let mut parts = self.required_dotnet_version.split('.');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(major), Some(minor), None)
                if is_digits(major) && is_digits(minor)
        );
        if !well_formed {
            return Err(BuildError::UserError(format!(
                "config validation failed: required_dotnet_version must look like '9.0' (found '{}')",
                self.required_dotnet_version
            )));
        }

        if !self.tailwind_version.starts_with('v') {
            return Err(BuildError::UserError(format!(
                "config validation failed: tailwind_version must be a release tag like 'v3.4.15' (found '{}')",
                self.tailwind_version
            )));
        }

        Ok(())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
