//! Employee service - list, read, create and update employee records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate_employee, Employee};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EmployeeRepository;

#[cfg(test)]
use mockall::automock;

/// Employee service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// All employees in store order
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// One employee by id
    async fn get_employee(&self, id: i32) -> AppResult<Employee>;

    /// Validate and insert; returns the store-assigned id
    async fn create_employee(&self, employee: Employee) -> AppResult<i32>;

    /// Validate and overwrite an existing employee
    async fn update_employee(&self, id: i32, employee: Employee) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeService.
pub struct EmployeeManager {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    fn ensure_valid(employee: &Employee) -> AppResult<()> {
        let errors = validate_employee(employee);
        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Rejected employee record");
            Err(AppError::Validation(errors))
        }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repository.list().await
    }

    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.repository.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, employee: Employee) -> AppResult<i32> {
        Self::ensure_valid(&employee)?;

        let id = self.repository.create(employee).await?;
        tracing::info!(employee_id = id, "Employee created");
        Ok(id)
    }

    async fn update_employee(&self, id: i32, employee: Employee) -> AppResult<Employee> {
        Self::ensure_valid(&employee)?;

        let updated = self.repository.update(id, employee).await?;
        tracing::info!(employee_id = id, "Employee updated");
        Ok(updated)
    }
}
