//! Database connection pool management.

use crate::config::DatabaseConfig;
use crate::db::schema::SCHEMA;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Shared handle to the school database.
///
/// Opened once at startup and handed to every handler through the
/// application state. Cloning is cheap: clones share the same pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the connection pool described by the configuration.
    ///
    /// Foreign key enforcement is switched on for every connection, since
    /// SQLite leaves it off unless asked.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(url = %config.url, "Database connection pool established");

        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// The pool holds exactly one connection that never expires, otherwise
    /// the database would vanish with it.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates every table that does not exist yet.
    ///
    /// Safe to run on each start: existing tables and their rows are left
    /// untouched.
    ///
    /// # Errors
    /// Returns an error if a DDL statement fails.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        info!(tables = SCHEMA.len(), "Database schema ready");
        Ok(())
    }

    /// Closes every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}
