//! Database connection and shutdown.
//!
//! The `employees` table is provisioned outside this service; nothing here
//! creates or alters schema.

use std::sync::Arc;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use crate::config::Config;

/// Store handle.
///
/// Built once at process start and handed to the service layer; each query
/// borrows a pooled connection for its own duration. Call [`Database::close`]
/// on shutdown.
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open the connection pool described by `config`.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url());
        options
            .max_connections(config.db_max_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            host = %config.db_host,
            database = %config.db_name,
            "Database connected"
        );

        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection (mock connections in tests).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Shared handle for repositories.
    pub fn shared_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the pool.
    ///
    /// Only the last holder can close it; while repositories still share the
    /// connection it is left to close when they drop.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.connection) {
            Ok(connection) => {
                connection.close().await?;
                tracing::info!("Database pool closed");
                Ok(())
            }
            Err(_) => {
                tracing::warn!("Database connection still shared, pool closes on drop");
                Ok(())
            }
        }
    }
}
