//! Author data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::author::{Column, Entity};

use crate::server::{
    data::scoped::{FieldKind, Scope, ScopedField},
    model::author::{Author, CreateAuthorParams, UpdateAuthorParams},
};

/// Slugs are unique per owner.
pub const UNIQUE_SLUG: ScopedField<Entity> = ScopedField {
    column: Column::Slug,
    scope: Column::UserId,
    id: Column::Id,
    kind: FieldKind::Slug,
    scope_kind: Scope::Owner,
    entity: "author",
    index: migration::index::AUTHOR_USER_SLUG,
};

pub struct AuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an author exactly as given.
    pub async fn create(&self, params: CreateAuthorParams) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Author::from_entity(entity))
    }

    /// Gets all authors of an owner ordered by name.
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Author>, DbErr> {
        let entities = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    /// Finds one of an owner's authors by slug.
    pub async fn find_by_slug(&self, user_id: i32, slug: &str) -> Result<Option<Author>, DbErr> {
        let entity = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Author::from_entity))
    }

    /// Applies a partial update to the author with the given ID.
    pub async fn update(&self, id: i32, params: UpdateAuthorParams) -> Result<Author, DbErr> {
        let mut active = entity::author::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.new_slug {
            active.slug = ActiveValue::Set(Some(slug));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }

        let entity = match active.is_changed() {
            true => active.update(self.db).await?,
            false => Entity::find_by_id(id)
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Author {} not found", id)))?,
        };

        Ok(Author::from_entity(entity))
    }

    /// Deletes an author; posts written by it are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
