//! Single-page application shell and unknown route handling.

use std::path::Path;

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::server::error::Error;

/// Serves files from the SPA build, falling back to `index.html` for client-side routes.
pub fn serve_dir(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}

/// Router fallback: JSON 404 below `/api`, the SPA everywhere else.
pub async fn fallback(static_dir: &Path, request: Request) -> Response {
    let path = request.uri().path();

    if path == "/api" || path.starts_with("/api/") {
        return Error::RouteNotFound(path.to_string()).into_response();
    }

    match serve_dir(static_dir).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(err) => match err {},
    }
}

