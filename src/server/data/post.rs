//! Post data repository.
//!
//! Posts are looked up by slug within their owner. Category and author summaries are
//! loaded alongside every post so the service never has to stitch them together.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use entity::post::{Column, Entity};

use crate::server::{
    data::scoped::{FieldKind, Scope, ScopedField},
    model::post::{CreatePostParams, Post, UpdatePostParams},
};

/// Slugs are unique per owner.
pub const UNIQUE_SLUG: ScopedField<Entity> = ScopedField {
    column: Column::Slug,
    scope: Column::UserId,
    id: Column::Id,
    kind: FieldKind::Slug,
    scope_kind: Scope::Owner,
    entity: "post",
    index: migration::index::POST_USER_SLUG,
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a post with already resolved category and author references.
    ///
    /// # Arguments
    /// - `params` - Post fields; `slug` must already be resolved
    /// - `category_id` - ID of the owner's category, if any
    /// - `author_id` - ID of the owner's author, if any
    ///
    /// # Returns
    /// - `Ok(Post)` - Inserted post with its category and author summaries
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn create(
        &self,
        params: &CreatePostParams,
        category_id: Option<i32>,
        author_id: Option<i32>,
    ) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            category_id: ActiveValue::Set(category_id),
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(params.title.clone()),
            slug: ActiveValue::Set(params.slug.clone()),
            excerpt: ActiveValue::Set(params.excerpt.clone()),
            image: ActiveValue::Set(None),
            time_read: ActiveValue::Set(params.time_read),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_relations(entity).await
    }

    /// Finds one of an owner's posts by slug.
    pub async fn find_by_slug(&self, user_id: i32, slug: &str) -> Result<Option<Post>, DbErr> {
        let entity = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.with_relations(entity).await?)),
            None => Ok(None),
        }
    }

    /// Finds the owner's posts matching any of `slugs`.
    ///
    /// Unknown slugs are simply absent from the result; callers compare lengths to
    /// detect them.
    pub async fn find_by_slugs(
        &self,
        user_id: i32,
        slugs: &[String],
    ) -> Result<Vec<entity::post::Model>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Slug.is_in(slugs.iter().cloned()))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Gets paginated posts for an owner, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the posts
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts of the page and total number of posts
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = Entity::find()
            .find_also_related(entity::prelude::Category)
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let author_ids: Vec<i32> = rows.iter().filter_map(|(post, _)| post.author_id).collect();
        let authors: HashMap<i32, entity::author::Model> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Author::find()
                .filter(entity::author::Column::Id.is_in(author_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|author| (author.id, author))
                .collect()
        };

        let posts = rows
            .into_iter()
            .map(|(post, category)| {
                let author = post.author_id.and_then(|id| authors.get(&id).cloned());
                Post::from_entity(post, category, author)
            })
            .collect();

        Ok((posts, total))
    }

    /// Applies a partial update to the post with the given ID.
    ///
    /// `category_id` and `author_id` replace the stored reference when `Some`.
    /// `updated_at` is refreshed on every call.
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePostParams,
        category_id: Option<i32>,
        author_id: Option<i32>,
    ) -> Result<Post, DbErr> {
        let mut active = entity::post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(slug) = params.new_slug {
            active.slug = ActiveValue::Set(Some(slug));
        }
        if category_id.is_some() {
            active.category_id = ActiveValue::Set(category_id);
        }
        if author_id.is_some() {
            active.author_id = ActiveValue::Set(author_id);
        }
        if let Some(excerpt) = params.excerpt {
            active.excerpt = ActiveValue::Set(Some(excerpt));
        }
        if let Some(time_read) = params.time_read {
            active.time_read = ActiveValue::Set(Some(time_read));
        }

        let entity = active.update(self.db).await?;

        self.with_relations(entity).await
    }

    /// Replaces the stored image path of a post.
    pub async fn set_image(&self, id: i32, image: Option<String>) -> Result<Post, DbErr> {
        let entity = entity::post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image: ActiveValue::Set(image),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.with_relations(entity).await
    }

    /// Stored image paths of the posts whose `column` references `id`.
    ///
    /// Used before deleting a category or author, whose posts are removed by the cascade.
    pub async fn image_paths(&self, column: Column, id: i32) -> Result<Vec<String>, DbErr> {
        let images: Vec<Option<String>> = Entity::find()
            .select_only()
            .column(Column::Image)
            .filter(column.eq(id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(images.into_iter().flatten().collect())
    }

    /// Deletes a post; sections, comments and tag links go with it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn with_relations(&self, entity: entity::post::Model) -> Result<Post, DbErr> {
        let category = match entity.category_id {
            Some(id) => entity::prelude::Category::find_by_id(id).one(self.db).await?,
            None => None,
        };
        let author = match entity.author_id {
            Some(id) => entity::prelude::Author::find_by_id(id).one(self.db).await?,
            None => None,
        };

        Ok(Post::from_entity(entity, category, author))
    }
}
