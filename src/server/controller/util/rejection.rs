use axum::extract::rejection::{JsonRejection, QueryRejection};

use crate::{model::input::ValidationError, server::error::Error};

/// Turns a JSON body rejection into a 400 with the usual error body.
pub fn body_error(rejection: JsonRejection) -> Error {
    Error::ValidationError(ValidationError::Body(rejection.body_text()))
}

/// Turns a query string rejection into a 400 with the usual error body.
pub fn query_error(rejection: QueryRejection) -> Error {
    Error::ValidationError(ValidationError::Query(rejection.body_text()))
}
