use crate::config::Config;
use crate::context::BuildContext;
use crate::download::Downloader;
use crate::error::{BuildError, Result};
use crate::process::{CapturedOutput, Invocation, ProcessRunner, RunOutcome};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A call observed by [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Capture(Invocation),
    Run(Invocation),
}

impl Call {
    pub(crate) fn invocation(&self) -> &Invocation {
        match self {
            Call::Capture(inv) | Call::Run(inv) => inv,
        }
    }
}

/// Process runner that records calls and replays canned results.
///
/// `capture` only answers `<program> --version` for programs registered with
/// [`FakeRunner::with_version`]; anything else fails like a missing binary.
/// `run` pops queued outcomes and defaults to a clean exit.
#[derive(Default)]
pub(crate) struct FakeRunner {
    calls: RefCell<Vec<Call>>,
    versions: HashMap<String, String>,
    outcomes: RefCell<VecDeque<RunOutcome>>,
    missing: HashSet<String>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_version(mut self, program: impl Into<String>, version: &str) -> Self {
        self.versions.insert(program.into(), version.to_string());
        self
    }

    pub(crate) fn with_outcome(self, outcome: RunOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    /// Make `run` fail to spawn this program.
    pub(crate) fn with_missing(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Invocations passed to `run`, in order.
    pub(crate) fn runs(&self) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Run(inv) => Some(inv.clone()),
                Call::Capture(_) => None,
            })
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        self.calls
            .borrow_mut()
            .push(Call::Capture(invocation.clone()));

        match self.versions.get(&invocation.program) {
            Some(version) if invocation.args == ["--version"] => Ok(CapturedOutput {
                stdout: version.clone(),
                stderr: String::new(),
            }),
            _ => Err(BuildError::ProcessError(format!(
                "failed to execute {}: not found",
                invocation.program
            ))),
        }
    }

    fn run(&self, invocation: &Invocation) -> Result<RunOutcome> {
        self.calls.borrow_mut().push(Call::Run(invocation.clone()));

        if self.missing.contains(&invocation.program) {
            return Err(BuildError::ProcessError(format!(
                "failed to execute {}: not found",
                invocation.program
            )));
        }

        Ok(self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(RunOutcome::Exited(Some(0))))
    }
}

/// Downloader that writes placeholder bytes instead of touching the network.
#[derive(Default)]
pub(crate) struct FakeDownloader {
    requests: RefCell<Vec<(String, PathBuf)>>,
    fail: bool,
}

impl FakeDownloader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<(String, PathBuf)> {
        self.requests.borrow().clone()
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, what: &str, url: &str, dest: &Path) -> Result<()> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));

        if self.fail {
            return Err(BuildError::DownloadError {
                what: what.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        std::fs::write(dest, format!("downloaded from {}\n", url)).map_err(|e| {
            BuildError::DownloadError {
                what: what.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// A context rooted in a fresh temporary directory with default config.
pub(crate) fn temp_context() -> (TempDir, BuildContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = BuildContext::new(temp_dir.path(), Config::default());
    (temp_dir, ctx)
}
