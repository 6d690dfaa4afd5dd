//! Post section data repository.
//!
//! Declares the per-post order column and its uniqueness rule alongside CRUD.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::section::{Column, Entity};

use crate::server::{
    data::scoped::{FieldKind, OrderField, Scope, ScopedField},
    model::section::{CreateSectionParams, Section, UpdateSectionParams},
};

/// Order value assigned per post.
pub const ORDER: OrderField<Entity> = OrderField {
    column: Column::Order,
    scope: Column::PostId,
};

/// Order values are unique per post.
pub const UNIQUE_ORDER: ScopedField<Entity> = ScopedField {
    column: Column::Order,
    scope: Column::PostId,
    id: Column::Id,
    kind: FieldKind::Order,
    scope_kind: Scope::Post,
    entity: "section",
    index: migration::index::SECTION_POST_ORDER,
};

pub struct SectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a section into the given post.
    ///
    /// # Arguments
    /// - `post_id` - Parent post, already resolved within the owner's posts
    /// - `params` - Section fields; `order` must already be assigned
    pub async fn create(&self, post_id: i32, params: CreateSectionParams) -> Result<Section, DbErr> {
        let entity = entity::section::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            post_id: ActiveValue::Set(post_id),
            order: ActiveValue::Set(params.order),
            sub_title: ActiveValue::Set(params.sub_title),
            content: ActiveValue::Set(params.content),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Section::from_entity(entity))
    }

    /// Gets the sections of a post in display order (order, then id).
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Section>, DbErr> {
        let entities = Entity::find()
            .filter(Column::PostId.eq(post_id))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Section::from_entity).collect())
    }

    /// Finds a section by ID within a post.
    pub async fn find_by_id(&self, post_id: i32, id: i32) -> Result<Option<Section>, DbErr> {
        let entity = Entity::find_by_id(id)
            .filter(Column::PostId.eq(post_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Section::from_entity))
    }

    /// Applies a partial update to the section with the given ID.
    pub async fn update(&self, id: i32, params: UpdateSectionParams) -> Result<Section, DbErr> {
        let mut active = entity::section::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(order) = params.order {
            active.order = ActiveValue::Set(Some(order));
        }
        if let Some(sub_title) = params.sub_title {
            active.sub_title = ActiveValue::Set(Some(sub_title));
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }

        let entity = match active.is_changed() {
            true => active.update(self.db).await?,
            false => Entity::find_by_id(id)
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Section {} not found", id)))?,
        };

        Ok(Section::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
