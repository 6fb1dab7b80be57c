//! Helpers for reading handler responses.

use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Converts a handler result into a response, rendering errors the way the router does.
pub fn into_response<T: IntoResponse, E: IntoResponse>(result: Result<T, E>) -> Response {
    match result {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
