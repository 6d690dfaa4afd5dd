use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        section::{CreateSectionDto, SectionDto, UpdateSectionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::section::{CreateSectionParams, UpdateSectionParams},
        service::section::SectionService,
        state::AppState,
    },
};

/// Tag for grouping section endpoints in OpenAPI documentation
pub static SECTION_TAG: &str = "section";

/// Create a section in a post.
///
/// When the order is omitted the section is appended after the post's last section.
///
/// # Returns
/// - `201 Created` - Successfully created section
/// - `400 Bad Request` - Invalid data or order already used in this post
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no post with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts/{slug}/sections",
    tag = SECTION_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    request_body = CreateSectionDto,
    responses(
        (status = 201, description = "Successfully created section", body = SectionDto),
        (status = 400, description = "Invalid section data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(payload): Json<CreateSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = SectionService::new(&state.db);

    let section = service
        .create(CreateSectionParams::from_dto(user.id, slug, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(section.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}/sections",
    tag = SECTION_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Sections in display order", body = Vec<SectionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sections(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = SectionService::new(&state.db);

    let sections = service.get_all(user.id, &slug).await?;

    Ok((
        StatusCode::OK,
        Json(
            sections
                .into_iter()
                .map(|section| section.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("slug" = String, Path, description = "Post slug"),
        ("id" = i32, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved section", body = SectionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = SectionService::new(&state.db);

    let section = service
        .get_by_id(user.id, &slug, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

/// Update a section.
///
/// Moving a section to the order value it already holds is allowed; moving it onto the
/// order of a sibling is rejected.
#[utoipa::path(
    patch,
    path = "/api/posts/{slug}/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("slug" = String, Path, description = "Post slug"),
        ("id" = i32, Path, description = "Section ID")
    ),
    request_body = UpdateSectionDto,
    responses(
        (status = 200, description = "Successfully updated section", body = SectionDto),
        (status = 400, description = "Invalid section data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = SectionService::new(&state.db);

    let section = service
        .update(UpdateSectionParams::from_dto(user.id, slug, id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}/sections/{id}",
    tag = SECTION_TAG,
    params(
        ("slug" = String, Path, description = "Post slug"),
        ("id" = i32, Path, description = "Section ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted section"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = SectionService::new(&state.db);

    if service.delete(user.id, &slug, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Section not found".to_string()))
    }
}
