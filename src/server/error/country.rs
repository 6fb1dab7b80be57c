use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api::ErrorKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum CountryError {
    /// The code is well formed but no country has it.
    #[error("No country found for code {0:?}")]
    NotFound(String),
    /// The country data source failed, timed out or answered with garbage.
    #[error("Country data source unavailable: {0}")]
    UpstreamUnavailable(#[source] country_api::Error),
}

impl IntoResponse for CountryError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref code) => {
                tracing::debug!(code = %code, "{}", self);

                error_response(
                    StatusCode::NOT_FOUND,
                    ErrorKind::NotFound,
                    format!("No country found for code {code}"),
                )
            }
            Self::UpstreamUnavailable(ref err) => {
                tracing::warn!(error = %err, "Country data source request failed");

                error_response(
                    StatusCode::BAD_GATEWAY,
                    ErrorKind::UpstreamUnavailable,
                    "Country data is temporarily unavailable, please try again later",
                )
            }
        }
    }
}
