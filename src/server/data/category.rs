//! Category data repository.
//!
//! Besides CRUD, this module declares the scoped rules for categories: the per-owner
//! order column and the (owner, slug) and (owner, order) uniqueness pairs.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::category::{Column, Entity};

use crate::server::{
    data::scoped::{FieldKind, OrderField, Scope, ScopedField},
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

/// Order value assigned per owner.
pub const ORDER: OrderField<Entity> = OrderField {
    column: Column::Order,
    scope: Column::UserId,
};

/// Slugs are unique per owner.
pub const UNIQUE_SLUG: ScopedField<Entity> = ScopedField {
    column: Column::Slug,
    scope: Column::UserId,
    id: Column::Id,
    kind: FieldKind::Slug,
    scope_kind: Scope::Owner,
    entity: "category",
    index: migration::index::CATEGORY_USER_SLUG,
};

/// Order values are unique per owner.
pub const UNIQUE_ORDER: ScopedField<Entity> = ScopedField {
    column: Column::Order,
    scope: Column::UserId,
    id: Column::Id,
    kind: FieldKind::Order,
    scope_kind: Scope::Owner,
    entity: "category",
    index: migration::index::CATEGORY_USER_ORDER,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category exactly as given.
    ///
    /// Slug derivation, order assignment and uniqueness checks happen in the service
    /// before this is called.
    ///
    /// # Returns
    /// - `Ok(Category)` - The inserted category
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            order: ActiveValue::Set(params.order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets all categories of an owner in display order (order, then id).
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Category>, DbErr> {
        let entities = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Finds one of an owner's categories by slug.
    pub async fn find_by_slug(&self, user_id: i32, slug: &str) -> Result<Option<Category>, DbErr> {
        let entity = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Applies a partial update to the category with the given ID.
    ///
    /// Fields left as `None` in `params` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Category)` - The updated category
    /// - `Err(DbErr::RecordNotFound)` - No category with that ID
    /// - `Err(DbErr)` - Other database error, including unique index violations
    pub async fn update(&self, id: i32, params: UpdateCategoryParams) -> Result<Category, DbErr> {
        let mut active = entity::category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.new_slug {
            active.slug = ActiveValue::Set(Some(slug));
        }
        if let Some(order) = params.order {
            active.order = ActiveValue::Set(Some(order));
        }

        let entity = match active.is_changed() {
            true => active.update(self.db).await?,
            false => Entity::find_by_id(id)
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Category {} not found", id)))?,
        };

        Ok(Category::from_entity(entity))
    }

    /// Deletes a category; posts filed under it are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
