//! Domain layer - Core business entities and logic
//!
//! The employee record plus the pure rules around it:
//! validation and derived/display values.

pub mod employee;
pub mod normalize;
pub mod validation;

pub use employee::{Employee, Gender, Salary};
pub use validation::{validate_employee, FieldErrors};
