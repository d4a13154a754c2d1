//! Subprocess runner for webbuild.
//!
//! Every external program (the dotnet CLI, the dotnet-install script) goes
//! through the [`ProcessRunner`] trait so the toolchain and command logic
//! can be exercised against a recording fake.

use crate::error::{BuildError, Result};
use crate::interrupt;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Output of a successful captured command.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl CapturedOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// How an interactive command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child exited on its own. `None` if it was killed by a signal.
    Exited(Option<i32>),
    /// The user pressed Ctrl+C while the child was running.
    Interrupted,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Exited(Some(0)))
    }
}

/// Runs external programs.
pub trait ProcessRunner {
    /// Run to completion with captured output.
    ///
    /// Spawn failure and non-zero exit are both `BuildError::ProcessError`.
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput>;

    /// Run with inherited standard streams and wait for it.
    ///
    /// Only a spawn failure is an error; the exit status is reported in the
    /// outcome for the caller to judge.
    fn run(&self, invocation: &Invocation) -> Result<RunOutcome>;
}

/// Runs real processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        tracing::debug!(command = %invocation, "capturing");

        let output = Command::new(&invocation.program)
            .current_dir(&self.cwd)
            .args(&invocation.args)
            .output()
            .map_err(|e| {
                BuildError::ProcessError(format!(
                    "failed to execute {}: {}",
                    invocation.program, e
                ))
            })?;

        let captured = CapturedOutput::from_output(&output);

        if output.status.success() {
            Ok(captured)
        } else {
            let exit_code = output.status.code().unwrap_or(-1);
            let error_msg = if captured.stderr.is_empty() {
                captured.stdout
            } else {
                captured.stderr
            };

            Err(BuildError::ProcessError(format!(
                "{} failed (exit code {}): {}",
                invocation, exit_code, error_msg
            )))
        }
    }

    fn run(&self, invocation: &Invocation) -> Result<RunOutcome> {
        let interrupts = interrupt::install_handler()?;
        // Only a Ctrl+C that arrives while this child runs counts.
        interrupts.reset();
        tracing::debug!(command = %invocation, "running");

        let status = Command::new(&invocation.program)
            .current_dir(&self.cwd)
            .args(&invocation.args)
            .status()
            .map_err(|e| {
                BuildError::ProcessError(format!(
                    "failed to execute {}: {}",
                    invocation.program, e
                ))
            })?;

        if interrupts.take() {
            tracing::debug!(command = %invocation, "interrupted");
            return Ok(RunOutcome::Interrupted);
        }

        tracing::debug!(command = %invocation, code = ?status.code(), "exited");
        Ok(RunOutcome::Exited(status.code()))
    }
}
