//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PASS,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    /// Full URL override (`DATABASE_URL`); wins over the individual parts
    database_url: Option<String>,
    pub db_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("db_max_connections", &self.db_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: DEFAULT_DB_HOST.to_string(),
            db_port: DEFAULT_DB_PORT,
            db_user: DEFAULT_DB_USER.to_string(),
            db_password: DEFAULT_DB_PASS.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and environment variables.
    ///
    /// Every store setting falls back to a hard-coded development default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            db_host: lookup("DB_HOST").unwrap_or(defaults.db_host),
            db_port: lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_port),
            db_user: lookup("DB_USER").unwrap_or(defaults.db_user),
            db_password: lookup("DB_PASS").unwrap_or(defaults.db_password),
            db_name: lookup("DB_NAME").unwrap_or(defaults.db_name),
            database_url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Connection URL for the employee store.
    ///
    /// User, password and database name are percent-encoded, so any byte
    /// in a credential reaches the server unchanged.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let user = urlencoding::encode(&self.db_user);
        let credentials = if self.db_password.is_empty() {
            user.into_owned()
        } else {
            format!("{}:{}", user, urlencoding::encode(&self.db_password))
        };

        format!(
            "mysql://{}@{}:{}/{}",
            credentials,
            self.db_host,
            self.db_port,
            urlencoding::encode(&self.db_name)
        )
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
