use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    model::{api::ErrorKind, input::ValidationError},
    server::error::error_response,
};

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(
            StatusCode::BAD_REQUEST,
            ErrorKind::ValidationError,
            self.to_string(),
        )
    }
}
