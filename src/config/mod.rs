//! Configuration model for webbuild.
//!
//! This module defines the Config struct that represents `webbuild.yaml`.
//! Every field is optional: the defaults reproduce the layout of the
//! Flowbite Blazor admin dashboard repository, so most checkouts need no
//! config file at all.

mod model;
mod operations;
mod types;


pub use model::Config;
pub(crate) use types::DEFAULT_CONFIG_FILE;
