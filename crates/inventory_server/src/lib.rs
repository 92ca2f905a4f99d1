//! HTTP surface of the fruit inventory service.
//!
//! Requests flow router -> controller -> DTO -> use-case -> repository ->
//! datasource; this crate owns the first two steps plus process wiring.

pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiErrorResponse, ErrorBody, ServerError};
pub use extract::RequestBody;
pub use routes::{create_router, INVENTORY_BASE_PATH};
pub use state::{AppState, SharedRepository};
