use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{
        category::CategoryRepository,
        comment::CommentRepository,
        post::PostRepository,
        scoped::{translate_violation, Scope},
        section::SectionRepository,
        tag::TagRepository,
        user::UserRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        category::{CreateCategoryParams, UpdateCategoryParams},
        comment::{CreateCommentParams, UpdateCommentParams},
        post::{CreatePostParams, UpdatePostParams},
        section::{CreateSectionParams, UpdateSectionParams},
    },
};

mod category;
mod comment;
mod post;
mod scoped;
mod section;
mod tag;
mod user;

/// Builds an in-memory database with every blog table and scoped unique index.
async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_blog_tables().build().await.unwrap()
}
