//! Tag factory for creating test tags and post links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag named `"Tag{id}"` for the given user.
pub async fn create_tag(db: &DatabaseConnection, user_id: i32) -> Result<entity::tag::Model, DbErr> {
    create_tag_with_name(db, user_id, format!("Tag{}", next_id())).await
}

/// Creates a tag with a specific name for the given user.
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    user_id: i32,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

/// Links a tag to a post.
pub async fn link_tag(
    db: &DatabaseConnection,
    post_id: i32,
    tag_id: i32,
) -> Result<entity::post_tag::Model, DbErr> {
    entity::post_tag::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await
}
