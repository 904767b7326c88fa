//! Employee handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Employee;
use crate::errors::{AppResult, ErrorResponse};
use crate::types::{Created, IdResponse};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", get(get_employee).put(update_employee))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "Every employee row, in store order", body = Vec<Employee>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// Get one employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee row", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = IdResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Employee>,
) -> AppResult<Created<IdResponse>> {
    let id = state.employee_service.create_employee(payload).await?;
    Ok(Created(IdResponse::new(id)))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = IdResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<Employee>,
) -> AppResult<Json<IdResponse>> {
    let updated = state.employee_service.update_employee(id, payload).await?;
    Ok(Json(IdResponse::new(updated.id.unwrap_or(id))))
}
