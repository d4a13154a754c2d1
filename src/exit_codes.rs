//! Exit code constants for the webbuild CLI.
//!
//! - 0: Success, including a Ctrl+C shutdown of watch/run
//! - 1: Any detected failure (download, install, unknown command, failed build/publish)

/// Successful execution or graceful interrupt.
pub const SUCCESS: i32 = 0;

/// Any fatal error.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
