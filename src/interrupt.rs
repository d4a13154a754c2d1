//! Ctrl+C handling for long-running child processes.
//!
//! The child shares our console, so it receives the interrupt itself. The
//! handler installed here only records that the interrupt happened; the
//! parent keeps running, waits for the child to exit, and then reports a
//! clean shutdown instead of dying mid-wait.

use crate::error::{BuildError, Result};
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag raised when the user presses Ctrl+C.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the flag as raised.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Lower the flag.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Lower the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Process-wide flag, set once the Ctrl+C handler is in place.
static HANDLER: OnceLock<InterruptFlag> = OnceLock::new();

/// Install the process Ctrl+C handler and return its flag.
///
/// Idempotent: the handler is registered on the first call only, later
/// calls return the same flag.
pub fn install_handler() -> Result<InterruptFlag> {
    if let Some(flag) = HANDLER.get() {
        return Ok(flag.clone());
    }

    let flag = InterruptFlag::new();
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || handler_flag.raise())
        .map_err(|e| BuildError::UserError(format!("failed to set Ctrl+C handler: {}", e)))?;
    tracing::debug!("installed Ctrl+C handler");

    Ok(HANDLER.get_or_init(|| flag).clone())
}
