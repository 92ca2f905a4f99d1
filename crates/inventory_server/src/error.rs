//! HTTP error responses and process startup errors.
//!
//! # Invariants
//! - Every error body has the shape `{"error": "<message>"}`.
//! - Store failures other than not-found become a generic 500; details stay
//!   in the log.

use crate::config::ConfigError;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventory_core::db::DbError;
use inventory_core::{InventoryError, ValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FRUIT_NOT_FOUND: &str = "Fruit not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Status code plus message, rendered as `ErrorBody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, FRUIT_NOT_FOUND)
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
    }

    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        Self::bad_request(error.message())
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<FormRejection> for ApiErrorResponse {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<InventoryError> for ApiErrorResponse {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::NotFound(_) => Self::not_found(),
            _ => Self::internal_error(),
        }
    }
}

/// Failure that prevents the server from starting or keeps it from serving.
#[derive(Debug)]
pub enum ServerError {
    Config(ConfigError),
    Logging(String),
    Db(DbError),
    Store(InventoryError),
    Io(std::io::Error),
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "database setup failed: {err}"),
            Self::Store(err) => write!(f, "fruit store setup failed: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ServerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for ServerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<InventoryError> for ServerError {
    fn from(value: InventoryError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
