//! HTTP routing and OpenAPI documentation.
//!
//! API handlers are registered through utoipa-axum so the OpenAPI document is collected
//! from their annotations. The document is served as JSON at `/api/docs/openapi.json`.

use std::{path::PathBuf, sync::Arc};

use axum::{extract::Request, routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Builds the API router and its OpenAPI documentation route.
///
/// # Registered Endpoints
/// - `POST /api/v1/auth/register`, `POST /api/v1/auth/login`, `POST /api/v1/auth/logout`
/// - `GET /api/v1/auth/user`
/// - `GET /api/v1/countries`, `GET /api/v1/countries/{code}`
/// - `GET /api/v1/favorites`, `POST|DELETE /api/v1/favorites/{code}`
/// - `GET /api/docs/openapi.json`
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Atlas", description = "Atlas country explorer API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session routes"),
        (name = controller::country::COUNTRY_TAG, description = "Country data from the REST Countries API"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite countries of the logged in user"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::country::list_countries))
        .routes(routes!(controller::country::get_country))
        .routes(routes!(controller::favorite::list_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    routes.route("/api/docs/openapi.json", get(move || async move { Json(api) }))
}

/// Builds the complete application: API routes, SPA fallback and request tracing.
///
/// Session and CORS layers are left to the caller so tests can use an in-memory store.
pub fn app(state: AppState, static_dir: PathBuf) -> Router {
    let static_dir = Arc::new(static_dir);

    routes()
        .fallback(move |request: Request| {
            let static_dir = static_dir.clone();
            async move { controller::spa::fallback(&static_dir, request).await }
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
