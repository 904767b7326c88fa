//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use crate::domain::{Employee, Gender};
use crate::errors::ErrorResponse;
use crate::types::IdResponse;

/// OpenAPI documentation for the payroll service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll",
        version = "0.1.0",
        description = "Employee record service: list, create and edit employees",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
    ),
    components(
        schemas(Employee, Gender, IdResponse, ErrorResponse)
    ),
    tags(
        (name = "Employees", description = "Employee record management")
    )
)]
pub struct ApiDoc;
