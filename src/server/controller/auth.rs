use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the authenticated user.
///
/// Resolves the API token of the request to its account.
///
/// # Returns
/// - `200 OK` - The account the token belongs to
/// - `401 Unauthorized` - Missing, malformed or unknown token
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
