//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and the repository. They depend on
//! the `EmployeeRepository` trait, never on SeaORM directly.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};

#[cfg(test)]
pub use employee_service::MockEmployeeService;
