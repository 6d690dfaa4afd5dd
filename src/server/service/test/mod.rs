use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        author::CreateAuthorDto,
        category::{CreateCategoryDto, UpdateCategoryDto},
        comment::{CreateCommentDto, UpdateCommentDto},
        post::{CreatePostDto, UpdatePostDto},
        section::{CreateSectionDto, UpdateSectionDto},
        tag::{CreateTagDto, UpdateTagDto},
    },
    server::{
        data::scoped::Scope,
        error::{validation::ValidationError, AppError},
        model::{
            author::CreateAuthorParams,
            category::{CreateCategoryParams, UpdateCategoryParams},
            comment::{CreateCommentParams, UpdateCommentParams},
            post::{CreatePostParams, UpdatePostParams},
            section::{CreateSectionParams, UpdateSectionParams},
            tag::{CreateTagParams, UpdateTagParams},
        },
        service::{
            author::AuthorService, category::CategoryService, comment::CommentService,
            image::{ImageService, ImageStorage},
            post::PostService,
            section::SectionService,
            tag::TagService,
        },
    },
};

mod author;
mod post;

/// Builds an in-memory database with every blog table and scoped unique index.
async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_blog_tables().build().await.unwrap()
}

fn new_category(user_id: i32, name: &str, order: Option<i32>) -> CreateCategoryParams {
    CreateCategoryParams::from_dto(
        user_id,
        CreateCategoryDto {
            name: name.to_string(),
            slug: None,
            order,
        },
    )
}

fn new_post(user_id: i32, title: &str) -> CreatePostParams {
    CreatePostParams::from_dto(
        user_id,
        CreatePostDto {
            title: title.to_string(),
            slug: None,
            category: None,
            author: None,
            excerpt: None,
            time_read: None,
            tags: None,
        },
    )
}

fn new_section(user_id: i32, post_slug: &str, sub_title: &str) -> CreateSectionParams {
    CreateSectionParams::from_dto(
        user_id,
        post_slug.to_string(),
        CreateSectionDto {
            order: None,
            sub_title: Some(sub_title.to_string()),
            content: format!("{} content", sub_title),
        },
    )
}
