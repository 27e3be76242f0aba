//! API routes module.

pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use openapi::ApiDoc;
pub use routes::create_router;
