//! Error types for the Atlas server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse` implementation that
//! picks the status code and [`ErrorKind`]. [`Error`] aggregates them so handlers and
//! services can use `?` throughout. Anything without a specific mapping becomes a
//! 500 through [`InternalServerError`], which logs the details and returns a generic
//! message.

pub mod auth;
pub mod config;
pub mod country;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{
        api::{ErrorDto, ErrorKind},
        input::ValidationError,
    },
    server::error::{auth::AuthError, config::ConfigError, country::CountryError},
};

/// Main error type for the Atlas server.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session, credential and registration failures.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Unknown country codes and upstream failures.
    #[error(transparent)]
    CountryError(#[from] CountryError),
    /// Malformed path, query or body values.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// No API route matches the request path.
    #[error("No API route for {0}")]
    RouteNotFound(String),
    /// A bug in Atlas rather than a problem with the request or its dependencies.
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    #[error(transparent)]
    CountryApiError(#[from] country_api::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CountryError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RouteNotFound(path) => {
                tracing::debug!(path = %path, "No API route found");

                error_response(
                    StatusCode::NOT_FOUND,
                    ErrorKind::NotFound,
                    format!("No API route for {path}"),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error body shared by every error response.
pub fn error_response(status: StatusCode, kind: ErrorKind, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            kind,
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error, returns a generic message so internals never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::InternalError,
            "Internal server error",
        )
    }
}
