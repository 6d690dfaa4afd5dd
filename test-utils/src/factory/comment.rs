//! Comment factory for creating test comment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment from `"John"` on the given post.
pub async fn create_comment(
    db: &DatabaseConnection,
    post: &entity::post::Model,
) -> Result<entity::comment::Model, DbErr> {
    create_comment_with_name(db, post, "John").await
}

/// Creates a comment with a specific commenter name on the given post.
pub async fn create_comment_with_name(
    db: &DatabaseConnection,
    post: &entity::post::Model,
    name: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    let now = Utc::now();
    entity::comment::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(post.user_id),
        post_id: ActiveValue::Set(post.id),
        name: ActiveValue::Set(Some(name.into())),
        message: ActiveValue::Set("Some sample message.".to_string()),
        is_visible: ActiveValue::Set(false),
        date_created: ActiveValue::Set(now),
        date_updated: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
