//! Database module for the SQLite store and per-table queries.

mod attendance;
mod classes;
mod grades;
mod salaries;
mod schema;
mod stats;
mod store;
mod students;
mod teachers;

pub use schema::*;
pub use store::Store;

/// Opens an initialized in-memory store for unit tests.
#[cfg(test)]
pub(crate) async fn test_store() -> Store {
    let store = Store::in_memory().await.expect("in-memory store");
    store.initialize().await.expect("schema");
    store
}
