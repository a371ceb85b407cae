use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Could not connect to the database: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!("Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            DatabaseError::MigrationError
        })
}

const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Translates a driver error into the repository error the domain understands.
pub fn map_db_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::PoolTimedOut => RepositoryError::Transient,
        sqlx::Error::Database(db_err) => {
            let mapped = classify_sql_state(db_err.code().as_deref());
            if matches!(mapped, RepositoryError::DatabaseError) {
                tracing::error!("Database error: {}", db_err);
            }
            mapped
        }
        _ => {
            tracing::error!("Database error: {}", err);
            RepositoryError::DatabaseError
        }
    }
}

fn classify_sql_state(code: Option<&str>) -> RepositoryError {
    match code {
        Some(SERIALIZATION_FAILURE) | Some(DEADLOCK_DETECTED) => RepositoryError::Transient,
        Some(UNIQUE_VIOLATION) => RepositoryError::Duplicated,
        Some(FOREIGN_KEY_VIOLATION) => RepositoryError::Conflict,
        _ => RepositoryError::DatabaseError,
    }
}

/// Converts a count column into the unsigned count the ports expose.
pub(crate) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

pub(crate) fn to_db_int(value: u32) -> Result<i32, RepositoryError> {
    i32::try_from(value).map_err(|_| RepositoryError::Persistence)
}

pub(crate) fn from_db_int(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
