//! Application configuration module
//!
//! Environment-driven settings plus the fixed vocabularies and defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
