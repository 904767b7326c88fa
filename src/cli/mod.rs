//! CLI module - Command-line interface for the application.
//!
//! Provides the `serve` command.

pub mod args;

pub use args::{Cli, Commands};
