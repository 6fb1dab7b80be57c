use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, rejection::body_error},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create an account and log in as the new user
///
/// # Responses
/// - 201 (Created): The new user, the session now belongs to them
/// - 400 (Bad Request): Malformed body, or name, email or password out of bounds
/// - 409 (Conflict): Email already registered
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created, session cookie set", body = UserDto),
        (status = 400, description = "Invalid name, email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(body_error)?;

    let user = AuthService::new(&state.db).register(payload).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
///
/// # Responses
/// - 200 (OK): The user, with a fresh session ID
/// - 400 (Bad Request): Malformed body
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = UserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(body_error)?;

    let user = AuthService::new(&state.db).login(payload).await?;

    // New session ID on privilege change
    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Log out by clearing the session
///
/// Succeeds whether or not a user was logged in.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only flush sessions which hold a user, there is nothing to delete otherwise
    if maybe_user_id.is_some() {
        session.flush().await?;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the logged in user
///
/// # Responses
/// - 200 (OK): The user bound to the session
/// - 401 (Unauthorized): No session, or its user no longer exists
#[utoipa::path(
    get,
    path = "/api/v1/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
