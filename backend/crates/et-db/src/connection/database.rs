use crate::{DbError, Result};

use error_location::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Owns the connection pool for the lifetime of the server.
///
/// Opened once at startup and handed to the router; `close` drains the pool
/// after the server has stopped accepting requests.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a file-backed database, creating it if missing, and run
    /// pending migrations.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Initialization {
                message: format!("Invalid database URL '{}': {}", url, e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Database connection established");

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// Private in-memory database with migrations applied.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        info!("Migrations complete");

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial query; used by the readiness check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
