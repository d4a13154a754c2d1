//! HTTP downloads.
//!
//! Blocking, single attempt, no timeout: a hung server blocks the build,
//! and a failure is reported to the caller without retrying.

use crate::error::{BuildError, Result};
use crate::fs::atomic_write_from;
use std::path::Path;

/// Fetches a URL to a local file.
pub trait Downloader {
    /// Download `url` to `dest`, replacing it atomically.
    ///
    /// `what` names the artifact in error messages ("Tailwind CSS").
    fn download(&self, what: &str, url: &str, dest: &Path) -> Result<()>;
}

/// Downloader backed by a `ureq` agent.
pub struct HttpDownloader {
    agent: ureq::Agent,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .user_agent(concat!("webbuild/", env!("CARGO_PKG_VERSION")))
                .build(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, what: &str, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!(url, dest = %dest.display(), "downloading");

        let failed = |reason: String| BuildError::DownloadError {
            what: what.to_string(),
            reason,
        };

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => failed(format!("HTTP {} from {}", code, url)),
            ureq::Error::Transport(transport) => failed(transport.to_string()),
        })?;

        let mut reader = response.into_reader();
        let bytes = atomic_write_from(dest, &mut reader).map_err(|e| failed(e.to_string()))?;

        tracing::debug!(bytes, dest = %dest.display(), "download complete");
        Ok(())
    }
}
