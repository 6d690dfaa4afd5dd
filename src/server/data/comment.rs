//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::comment::{Column, Entity};

use crate::server::model::comment::{Comment, CreateCommentParams, UpdateCommentParams};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment on the given post.
    pub async fn create(&self, post_id: i32, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            post_id: ActiveValue::Set(post_id),
            name: ActiveValue::Set(params.name),
            message: ActiveValue::Set(params.message),
            is_visible: ActiveValue::Set(params.is_visible),
            date_created: ActiveValue::Set(now),
            date_updated: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_post(entity).await
    }

    /// Gets an owner's comments, oldest first, optionally limited to one post.
    pub async fn get_all(&self, user_id: i32, post_id: Option<i32>) -> Result<Vec<Comment>, DbErr> {
        let mut query = Entity::find()
            .find_also_related(entity::prelude::Post)
            .filter(Column::UserId.eq(user_id));

        if let Some(post_id) = post_id {
            query = query.filter(Column::PostId.eq(post_id));
        }

        let rows = query
            .order_by_asc(Column::DateCreated)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, post)| Comment::from_entity(comment, post))
            .collect())
    }

    /// Finds one of an owner's comments by ID.
    pub async fn find_by_id(&self, user_id: i32, id: i32) -> Result<Option<Comment>, DbErr> {
        let row = Entity::find_by_id(id)
            .find_also_related(entity::prelude::Post)
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, post)| Comment::from_entity(comment, post)))
    }

    /// Applies a partial update, moving the comment to `post_id` when given.
    pub async fn update(
        &self,
        id: i32,
        post_id: Option<i32>,
        params: UpdateCommentParams,
    ) -> Result<Comment, DbErr> {
        let mut active = entity::comment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            date_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(post_id) = post_id {
            active.post_id = ActiveValue::Set(post_id);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(Some(name));
        }
        if let Some(message) = params.message {
            active.message = ActiveValue::Set(message);
        }
        if let Some(is_visible) = params.is_visible {
            active.is_visible = ActiveValue::Set(is_visible);
        }

        let entity = active.update(self.db).await?;

        self.with_post(entity).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn with_post(&self, entity: entity::comment::Model) -> Result<Comment, DbErr> {
        let post = entity::prelude::Post::find_by_id(entity.post_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, post))
    }
}
