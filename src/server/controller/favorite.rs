use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, favorite::FavoritesDto, input::CountryCode},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get the logged in user's favorite countries
///
/// # Responses
/// - 200 (OK): `{"favorites": [...]}` sorted by code
/// - 401 (Unauthorized): No valid session
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorite country codes, sorted", body = FavoritesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user.id)
        .await?;

    Ok((StatusCode::OK, Json(FavoritesDto { favorites })))
}

/// Mark a country as favorite
///
/// Idempotent, adding an existing favorite returns the unchanged set.
#[utoipa::path(
    post,
    path = "/api/v1/favorites/{code}",
    tag = FAVORITE_TAG,
    params(("code" = String, Path, description = "Three letter country code, any case")),
    responses(
        (status = 200, description = "Favorite added, returns the updated set", body = FavoritesDto),
        (status = 400, description = "Malformed country code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let code = CountryCode::parse(&code)?;

    let favorite_service = FavoriteService::new(&state.db);
    favorite_service.add_favorite(user.id, &code).await?;
    let favorites = favorite_service.list_favorites(user.id).await?;

    Ok((StatusCode::OK, Json(FavoritesDto { favorites })))
}

/// Unmark a favorite country
///
/// Idempotent, removing a country that isn't a favorite still succeeds.
///
/// # Responses
/// - 204 (No Content): The country is not a favorite
/// - 400 (Bad Request): Malformed country code
/// - 401 (Unauthorized): No valid session, checked before the code
#[utoipa::path(
    delete,
    path = "/api/v1/favorites/{code}",
    tag = FAVORITE_TAG,
    params(("code" = String, Path, description = "Three letter country code, any case")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Malformed country code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let code = CountryCode::parse(&code)?;

    FavoriteService::new(&state.db)
        .remove_favorite(user.id, &code)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
