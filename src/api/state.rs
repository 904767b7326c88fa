//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, EmployeeStore};
use crate::services::{EmployeeManager, EmployeeService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Employee use cases
    pub employee_service: Arc<dyn EmployeeService>,
    /// Store handle (health checks, shutdown)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM repository and employee service onto a store handle.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repository = Arc::new(EmployeeStore::new(database.shared_connection()));
        let employee_service = Arc::new(EmployeeManager::new(repository));

        Self {
            employee_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }
}
