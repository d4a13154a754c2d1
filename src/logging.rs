//! Diagnostic logging setup.
//!
//! Progress output for humans goes to stdout with `println!`. The `tracing`
//! events emitted around downloads and subprocesses are written to stderr and
//! filtered by `WEBBUILD_LOG` (e.g. `WEBBUILD_LOG=debug`), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "WEBBUILD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
