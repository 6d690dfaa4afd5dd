use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tag::{CreateTagDto, TagDto, UpdateTagDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::tag::{CreateTagParams, UpdateTagParams},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Create a tag, optionally attached to posts given by slug.
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Invalid data or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "A referenced post was not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = TagService::new(&state.db);

    let tag = service
        .create(CreateTagParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = TagService::new(&state.db);

    let tags = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(tags.into_iter().map(|tag| tag.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = TagDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = TagService::new(&state.db);

    let tag = service
        .get_by_id(user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Rename a tag and/or replace the posts it is attached to.
#[utoipa::path(
    patch,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = TagDto),
        (status = 400, description = "Invalid data or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tag or a referenced post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = TagService::new(&state.db);

    let tag = service
        .update(UpdateTagParams::from_dto(user.id, id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tag"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = TagService::new(&state.db);

    if service.delete(user.id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Tag not found".to_string()))
    }
}
