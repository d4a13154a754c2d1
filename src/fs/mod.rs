//! Filesystem utilities for webbuild.
//!
//! Downloads land through an atomic write so a half-fetched binary is never
//! mistaken for a cached one.

pub mod atomic;

pub use atomic::atomic_write_from;
pub use atomic::make_executable;
