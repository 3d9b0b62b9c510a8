//! Database connection settings.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::error::{backend, ConfigError, Result};

/// Connection URL, required.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Upper bound of the pool size.
pub const MAX_CONNECTIONS_VAR: &str = "PLANETARIUM_DB_MAX_CONNECTIONS";
/// Connections kept open while idle.
pub const MIN_CONNECTIONS_VAR: &str = "PLANETARIUM_DB_MIN_CONNECTIONS";
/// `true`/`false`; logs every SQL statement through `tracing` when set.
pub const SQL_LOGGING_VAR: &str = "PLANETARIUM_DB_SQL_LOGGING";

/// Settings for the Sea-ORM connection pool backing a
/// [`BookingStore`](crate::BookingStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sql_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(10),
            max_lifetime: Duration::from_secs(10 * 60),
            sql_logging: false,
        }
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR).ok_or(ConfigError::Missing {
            var: DATABASE_URL_VAR,
        })?;
        let mut config = Self::new(url);

        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = parse_var(MAX_CONNECTIONS_VAR, value)?;
        }
        if let Some(value) = lookup(MIN_CONNECTIONS_VAR) {
            config.min_connections = parse_var(MIN_CONNECTIONS_VAR, value)?;
        }
        if let Some(value) = lookup(SQL_LOGGING_VAR) {
            config.sql_logging = parse_var(SQL_LOGGING_VAR, value)?;
        }

        if config.min_connections > config.max_connections {
            return Err(ConfigError::Invalid {
                var: MIN_CONNECTIONS_VAR,
                value: config.min_connections.to_string(),
            });
        }

        Ok(config)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = self.min_connections.min(max_connections);
        self
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sql_logging);
        options
    }

    pub async fn connect(&self) -> Result<DatabaseConnection> {
        info!(
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            "connecting to database"
        );
        Database::connect(self.connect_options())
            .await
            .map_err(backend)
    }

    /// Connects and brings the schema up to date.
    #[cfg(feature = "migration")]
    pub async fn connect_and_migrate(&self) -> Result<DatabaseConnection> {
        use crate::migration::{Migrator, MigratorTrait};

        let conn = self.connect().await?;
        Migrator::up(&conn, None).await.map_err(backend)?;
        info!("database migrations applied");
        Ok(conn)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
