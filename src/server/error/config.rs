use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures, reported before the listener is bound.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
