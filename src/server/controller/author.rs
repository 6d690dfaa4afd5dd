use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDetailDto, AuthorDto, CreateAuthorDto, UpdateAuthorDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::author::{CreateAuthorParams, UpdateAuthorParams},
        service::author::AuthorService,
        state::AppState,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// Create a new author.
///
/// The slug is derived from the name when omitted and must be unique among the user's
/// authors.
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorDto,
    responses(
        (status = 201, description = "Successfully created author", body = AuthorDetailDto),
        (status = 400, description = "Invalid author data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AuthorService::new(&state.db);

    let author = service
        .create(CreateAuthorParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(author.into_detail_dto())))
}

/// Get all authors of the authenticated user, ordered by name.
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved authors", body = Vec<AuthorDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AuthorService::new(&state.db);

    let authors = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            authors
                .into_iter()
                .map(|author| author.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/authors/{slug}",
    tag = AUTHOR_TAG,
    params(
        ("slug" = String, Path, description = "Author slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved author", body = AuthorDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AuthorService::new(&state.db);

    let author = service
        .get_by_slug(user.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

    Ok((StatusCode::OK, Json(author.into_detail_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/authors/{slug}",
    tag = AUTHOR_TAG,
    params(
        ("slug" = String, Path, description = "Author slug")
    ),
    request_body = UpdateAuthorDto,
    responses(
        (status = 200, description = "Successfully updated author", body = AuthorDetailDto),
        (status = 400, description = "Invalid author data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AuthorService::new(&state.db);

    let author = service
        .update(UpdateAuthorParams::from_dto(user.id, slug, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

    Ok((StatusCode::OK, Json(author.into_detail_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/authors/{slug}",
    tag = AUTHOR_TAG,
    params(
        ("slug" = String, Path, description = "Author slug")
    ),
    responses(
        (status = 204, description = "Successfully deleted author"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = AuthorService::new(&state.db);

    let Some(images) = service.delete(user.id, &slug).await? else {
        return Err(AppError::NotFound("Author not found".to_string()));
    };

    state.media.discard_all(images).await;

    Ok(StatusCode::NO_CONTENT)
}
