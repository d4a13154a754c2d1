//! Host platform detection and the Tailwind CSS release table.
//!
//! Tailwind publishes one standalone binary per OS/architecture. Only three
//! are used here; anything else is rejected before any file is written.

use crate::error::{BuildError, Result};
use std::fmt;

/// Base URL for Tailwind CSS release assets.
const TAILWIND_RELEASES_URL: &str = "https://github.com/tailwindlabs/tailwindcss/releases/download";

/// A supported host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detect the platform this binary is running on.
    pub fn current() -> Result<Self> {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` identifier to a platform.
    pub fn from_identifier(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            "windows" => Ok(Platform::Windows),
            other => Err(BuildError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }

    /// Name of a native executable on this platform.
    pub fn executable_name(self, stem: &str) -> String {
        if self.is_windows() {
            format!("{}.exe", stem)
        } else {
            stem.to_string()
        }
    }

    /// Release asset and local executable name for Tailwind CSS.
    pub fn tailwind_descriptor(self, tailwind_version: &str) -> OsDescriptor {
        let asset = match self {
            Platform::Linux => "tailwindcss-linux-x64",
            Platform::MacOs => "tailwindcss-macos-arm64",
            Platform::Windows => "tailwindcss-windows-x64.exe",
        };

        OsDescriptor {
            os_name: self.to_string(),
            url: format!("{}/{}/{}", TAILWIND_RELEASES_URL, tailwind_version, asset),
            exec_name: self.executable_name("tailwindcss"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}

/// Where to fetch Tailwind CSS from and what to call it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsDescriptor {
    /// Human-readable OS name used in progress messages.
    pub os_name: String,
    /// Download URL of the release asset.
    pub url: String,
    /// File name of the executable inside the tools directory.
    pub exec_name: String,
}
