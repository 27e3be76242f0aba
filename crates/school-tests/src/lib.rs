//! End-to-end tests for the School Administration API.
//!
//! Each test starts its own server on an ephemeral local port, backed by a
//! private in-memory database, and talks to it through [`SchoolClient`].

use school_admin_backend::api::create_router;
use school_admin_backend::state::AppState;
use school_client::{ClientConfig, SchoolClient};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running server and a client pointed at it.
pub struct TestServer {
    /// Client for the server.
    pub client: SchoolClient,
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Starts a server over a fresh in-memory database.
    ///
    /// # Panics
    /// Panics if the database, listener or client cannot be created.
    pub async fn start() -> Self {
        let state = AppState::in_memory()
            .await
            .expect("Failed to open in-memory store");
        let app = create_router(Arc::new(state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = SchoolClient::new(ClientConfig {
            base_url: format!("http://{}", addr),
            timeout: Duration::from_secs(10),
        })
        .expect("Failed to create client");

        Self {
            client,
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Returns the absolute URL of a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
