use axum::extract::DefaultBodyLimit;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        author::{self, AUTHOR_TAG},
        category::{self, CATEGORY_TAG},
        comment::{self, COMMENT_TAG},
        post::{self, POST_TAG},
        section::{self, SECTION_TAG},
        tag::{self, TAG_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "inkpost", description = "Blog content API"),
    tags(
        (name = AUTH_TAG, description = "Authenticated account"),
        (name = CATEGORY_TAG, description = "Ordered post categories"),
        (name = AUTHOR_TAG, description = "Post authors"),
        (name = POST_TAG, description = "Posts and their images"),
        (name = SECTION_TAG, description = "Ordered sections of a post"),
        (name = TAG_TAG, description = "Post tags"),
        (name = COMMENT_TAG, description = "Comments on posts")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
///
/// # Arguments
/// - `max_upload_bytes` - Body limit applied to the image upload route
pub fn router(max_upload_bytes: usize) -> axum::Router<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(post::upload_post_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_user))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(author::get_authors, author::create_author))
        .routes(routes!(
            author::get_author,
            author::update_author,
            author::delete_author
        ))
        .routes(routes!(post::get_posts, post::create_post))
        .routes(routes!(post::get_post, post::update_post, post::delete_post))
        .routes(routes!(section::get_sections, section::create_section))
        .routes(routes!(
            section::get_section,
            section::update_section,
            section::delete_section
        ))
        .routes(routes!(tag::get_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::update_tag, tag::delete_tag))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(
            comment::get_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .merge(upload)
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
