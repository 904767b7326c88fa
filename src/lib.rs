//! Payroll - Employee records service
//!
//! Stores employee records in MySQL and serves them over a small JSON API,
//! with a presentation model for the grid-and-form editor.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Employee record, derivation rules and validation
//! - **services**: Employee use cases
//! - **infra**: Database connection and repository
//! - **api**: HTTP handlers, extractors and routes
//! - **ui**: Grid and form state for the editor
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind elsewhere
//! cargo run -- serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod ui;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, Salary};
pub use errors::{AppError, AppResult};
