use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api::ErrorKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed for {email:?}: unknown email or wrong password")]
    InvalidCredentials { email: String },
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
}

impl AuthError {
    fn unauthorized() -> Response {
        error_response(
            StatusCode::UNAUTHORIZED,
            ErrorKind::Unauthorized,
            "You need to be logged in to do that",
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthorized()
            }
            Self::InvalidCredentials { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::UNAUTHORIZED,
                    ErrorKind::Unauthorized,
                    "Invalid email or password",
                )
            }
            Self::EmailTaken(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::CONFLICT,
                    ErrorKind::Conflict,
                    "An account with this email already exists",
                )
            }
        }
    }
}
