use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a new category.
///
/// Creates a category owned by the authenticated user. When the slug is omitted it is
/// derived from the name; when the order is omitted the category is placed after the
/// user's last category.
///
/// # Access Control
/// - Authenticated user, acting on their own categories
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the API token
/// - `payload` - Category name with optional slug and order
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Invalid data, or slug/order already used by another category
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CategoryService::new(&state.db);

    let params = CreateCategoryParams::from_dto(user.id, payload);

    let category = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get all categories of the authenticated user.
///
/// Returns the categories in display order.
///
/// # Returns
/// - `200 OK` - Categories ordered by order value
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CategoryService::new(&state.db);

    let categories = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|category| category.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific category by slug.
///
/// # Returns
/// - `200 OK` - Category details
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no category with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CategoryService::new(&state.db);

    let category = service
        .get_by_slug(user.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Update a category.
///
/// Applies a partial update; omitted fields keep their value. Setting the slug or order
/// to the category's current value is allowed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the API token
/// - `slug` - Current slug of the category
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Successfully updated category
/// - `400 Bad Request` - Invalid data, or slug/order already used by another category
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no category with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/categories/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CategoryService::new(&state.db);

    let params = UpdateCategoryParams::from_dto(user.id, slug, payload);

    let category = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Posts filed under the category are deleted with it.
///
/// # Returns
/// - `204 No Content` - Successfully deleted category
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The user has no category with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/categories/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = CategoryService::new(&state.db);

    let Some(images) = service.delete(user.id, &slug).await? else {
        return Err(AppError::NotFound("Category not found".to_string()));
    };

    state.media.discard_all(images).await;

    Ok(StatusCode::NO_CONTENT)
}
