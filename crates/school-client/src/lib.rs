//! HTTP client library for the School Administration API.
//!
//! This crate provides a typed HTTP client for every REST endpoint of the
//! school administration backend.
//!
//! # Example
//!
//! ```no_run
//! use school_client::{SchoolClient, ClientConfig, TeacherInput};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), school_client::Error> {
//!     let client = SchoolClient::new(ClientConfig {
//!         base_url: "http://localhost:4000".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let created = client
//!         .create_teacher(&TeacherInput {
//!             first_name: Some("Ann".into()),
//!             last_name: Some("Lee".into()),
//!             subject: Some("Math".into()),
//!         })
//!         .await?;
//!     println!("Teacher id: {}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, SchoolClient};
pub use error::Error;
pub use types::*;
