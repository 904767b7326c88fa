//! Infrastructure layer - External systems integration
//!
//! - Database connection and shutdown
//! - Employee repository over the `employees` table

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{EmployeeRepository, EmployeeStore};

#[cfg(test)]
pub use repositories::MockEmployeeRepository;
