use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        post::{
            CreatePostDto, PaginatedPostsDto, PostDetailDto, PostDto, PostImageUploadDto,
            UpdatePostDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::auth::AuthGuard,
        model::post::{CreatePostParams, UpdatePostParams},
        service::{image::ImageService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Largest page size a client may request.
const MAX_ENTRIES: u64 = 100;

/// Name of the multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Create a new post.
///
/// Creates a post owned by the authenticated user. The slug is derived from the title
/// when omitted. Category and author are referenced by slug among the user's own records;
/// tags are referenced by name and created when the user has no tag with that name yet.
///
/// # Access Control
/// - Authenticated user, acting on their own posts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the API token
/// - `payload` - Post fields
///
/// # Returns
/// - `201 Created` - Successfully created post with its (empty) sections and tags
/// - `400 Bad Request` - Invalid data or slug already used by another post
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Referenced category or author does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDetailDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category or author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = PostService::new(&state.db);

    let params = CreatePostParams::from_dto(user.id, payload);

    let post = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get paginated posts of the authenticated user.
///
/// Returns the newest posts first together with their category and author summaries.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the API token
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Page of posts with pagination counts
/// - `400 Bad Request` - Page number out of range
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved posts", body = PaginatedPostsDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = PostService::new(&state.db);

    let entries = params.entries.clamp(1, MAX_ENTRIES);
    let posts = service.get_paginated(user.id, params.page, entries).await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Get a post by slug with its sections in display order and its tag names.
#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = PostService::new(&state.db);

    let post = service
        .get_by_slug(user.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Update a post.
///
/// Applies a partial update. When `tags` is present it replaces the post's tags.
///
/// # Returns
/// - `200 OK` - Successfully updated post
/// - `400 Bad Request` - Invalid data or slug already used by another post
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Post, category or author not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/posts/{slug}",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDetailDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post, category or author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = PostService::new(&state.db);

    let params = UpdatePostParams::from_dto(user.id, slug, payload);

    let post = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post.
///
/// Sections, comments and tag links of the post are deleted with it, and its stored image
/// is removed from the media directory.
///
/// # Returns
/// - `204 No Content` - Successfully deleted post
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no post with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = PostService::new(&state.db);

    let post = service
        .delete(user.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    state.media.discard(post.image).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload the image of a post.
///
/// Expects a multipart form with an `image` file field. The file is stored under a
/// generated name and replaces the post's previous image, which is removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection and media storage
/// - `headers` - Request headers carrying the API token
/// - `slug` - Slug of the post
/// - `multipart` - Multipart form carrying the image
///
/// # Returns
/// - `200 OK` - Post with its new image path
/// - `400 Bad Request` - Missing `image` field, unreadable form or unsupported file type
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no post with this slug
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/posts/{slug}/image",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    request_body(content = PostImageUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully uploaded image", body = PostDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_post_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(ValidationError::Required { field: IMAGE_FIELD }.into());
    };

    let service = ImageService::new(&state.db, &state.media);

    let post = service
        .upload(user.id, &slug, &file_name, &bytes)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}
