//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port (the form client talks to localhost:5000)
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database port (MySQL)
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Default database password (empty)
pub const DEFAULT_DB_PASS: &str = "";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "payroll";

/// Default upper bound on pooled store connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Employee vocabulary
// =============================================================================

/// Salutations offered by the form, in display order ("" = not selected)
pub const SALUTATIONS: &[&str] = &["Mr.", "Ms.", "Mrs.", "Dr.", "Mx."];

/// Profile colors offered by the form (radio values are lower-cased)
pub const PROFILE_COLORS: &[&str] = &["Green", "Blue", "Red", "Default"];

/// CSS class used for a green profile
pub const CLASS_GREEN: &str = "btn-success";

/// CSS class used for a red profile
pub const CLASS_RED: &str = "btn-danger";

/// CSS class used for a blue profile
pub const CLASS_BLUE: &str = "btn-primary";

/// CSS class for default, unknown or missing colors
pub const CLASS_FALLBACK: &str = "btn-secondary";

// =============================================================================
// Presentation
// =============================================================================

/// Alert prefix shown when a save fails
pub const SAVE_ERROR_PREFIX: &str = "Error saving employee";
