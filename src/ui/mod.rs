//! Presentation layer - Employee grid and edit form.
//!
//! Renderer-agnostic state for the single-page editor: the grid rows, the
//! open form with its derived fields, and the save cycle against the
//! employee service.

pub mod editor;
pub mod form;
pub mod grid;

pub use editor::{EmployeeEditor, SaveOutcome};
pub use form::{EmployeeForm, FormField, FormOption, SaveRequest};
pub use grid::{Column, COLUMNS};
