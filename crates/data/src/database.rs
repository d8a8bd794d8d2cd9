use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

use rota_ops_core::config::DatabaseConfig;

pub struct DatabaseClient {
    pool: PgPool,
}

impl DatabaseClient {
    /// Creates a new database client connected to the specified `PostgreSQL` database.
    ///
    /// # Errors
    /// Returns an error if the database connection cannot be established.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    /// Returns an error if the database connection cannot be established.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        tracing::info!(max_connections = config.max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Returns a handle to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    /// Liveness check used by the health endpoint.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
