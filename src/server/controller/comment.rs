use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
pub struct CommentFilter {
    /// Only list comments of the post with this slug.
    pub post: Option<String>,
}

/// Create a comment on one of the authenticated user's posts.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CommentService::new(&state.db);

    let comment = service
        .create(CreateCommentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get comments on the authenticated user's posts, oldest first.
///
/// An unknown `post` slug yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(
        ("post" = Option<String>, Query, description = "Only comments of the post with this slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<CommentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CommentService::new(&state.db);

    let comments = service.get_all(user.id, filter.post.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|comment| comment.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comment", body = CommentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CommentService::new(&state.db);

    let comment = service
        .get_by_id(user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Update a comment.
///
/// Setting `post` moves the comment to another post of the same user.
#[utoipa::path(
    patch,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment or post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CommentService::new(&state.db);

    let comment = service
        .update(UpdateCommentParams::from_dto(user.id, id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CommentService::new(&state.db);

    if service.delete(user.id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Comment not found".to_string()))
    }
}
