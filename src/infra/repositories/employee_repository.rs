//! Employee repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::Employee;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Every call is a single statement: no retries, no locking.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All rows, unfiltered, in store order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Find employee by store id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Insert the business fields and return the assigned id
    async fn create(&self, employee: Employee) -> AppResult<i32>;

    /// Overwrite the business fields of an existing row
    async fn update(&self, id: i32, employee: Employee) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl EmployeeStore {
    /// Create a repository over the shared store connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn create(&self, employee: Employee) -> AppResult<i32> {
        let mut active = ActiveModel::new();
        employee::apply_fields(&mut active, &employee);

        let result = EmployeeEntity::insert(active)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i32, employee: Employee) -> AppResult<Employee> {
        let existing = EmployeeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        employee::apply_fields(&mut active, &employee);

        let model = active.update(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }
}
