//! Application state management.

use crate::config::Config;
use crate::db::Store;
use tracing::info;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The school database.
    pub store: Store,
    /// Application configuration, when started from one.
    pub config: Option<Config>,
}

impl AppState {
    /// Creates a new application state over an opened store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            config: None,
        }
    }

    /// Opens and initializes the store described by the configuration.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or its schema created.
    pub async fn from_config(config: Config) -> Result<Self, sqlx::Error> {
        let store = Store::open(&config.database).await?;
        store.initialize().await?;
        info!(url = %config.database.url, "Store ready");

        Ok(Self {
            store,
            config: Some(config),
        })
    }

    /// Creates a state over a fresh in-memory database.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or its schema created.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let store = Store::in_memory().await?;
        store.initialize().await?;
        Ok(Self::new(store))
    }
}
