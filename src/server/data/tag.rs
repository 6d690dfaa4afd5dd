//! Tag data repository.
//!
//! Tags are owner-scoped names linked to posts through the `post_tag` table.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use entity::tag::{Column, Entity};

use crate::server::{
    data::scoped::{FieldKind, Scope, ScopedField},
    model::tag::Tag,
};

/// Tag names are unique per owner.
pub const UNIQUE_NAME: ScopedField<Entity> = ScopedField {
    column: Column::Name,
    scope: Column::UserId,
    id: Column::Id,
    kind: FieldKind::Name,
    scope_kind: Scope::Owner,
    entity: "tag",
    index: migration::index::TAG_USER_NAME,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a tag for an owner.
    pub async fn create(&self, user_id: i32, name: String) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds one of an owner's tags by ID.
    pub async fn find_by_id(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Finds one of an owner's tags by exact name.
    pub async fn find_by_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a tag with the slugs of its posts.
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Option<Tag>, DbErr> {
        let Some(tag) = self.find_by_id(user_id, id).await? else {
            return Ok(None);
        };

        let mut posts = self.posts_by_tag(&[tag.id]).await?;
        let posts = posts.remove(&tag.id).unwrap_or_default();

        Ok(Some(Tag::from_entity(tag, posts)))
    }

    /// Gets all tags of an owner ordered by name, each with the slugs of its posts.
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Tag>, DbErr> {
        let tags = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        let tag_ids: Vec<i32> = tags.iter().map(|tag| tag.id).collect();
        let mut posts = self.posts_by_tag(&tag_ids).await?;

        Ok(tags
            .into_iter()
            .map(|tag| {
                let tag_posts = posts.remove(&tag.id).unwrap_or_default();
                Tag::from_entity(tag, tag_posts)
            })
            .collect())
    }

    /// Gets the tag names of a post ordered by name.
    pub async fn names_for_post(&self, post_id: i32) -> Result<Vec<String>, DbErr> {
        let tags = Entity::find()
            .join(JoinType::InnerJoin, entity::tag::Relation::PostTag.def())
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }

    /// Renames a tag.
    pub async fn rename(&self, id: i32, name: String) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Replaces the posts a tag is attached to.
    pub async fn set_posts(&self, tag_id: i32, post_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::TagId.eq(tag_id))
            .exec(self.db)
            .await?;

        for post_id in post_ids {
            link(self.db, *post_id, tag_id).await?;
        }

        Ok(())
    }

    /// Replaces the tags attached to a post.
    pub async fn set_tags_for_post(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for tag_id in tag_ids {
            link(self.db, post_id, *tag_id).await?;
        }

        Ok(())
    }

    /// Deletes a tag; its post links go with it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn posts_by_tag(
        &self,
        tag_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::post::Model>>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::PostTag::find()
            .find_also_related(entity::prelude::Post)
            .filter(entity::post_tag::Column::TagId.is_in(tag_ids.iter().copied()))
            .order_by_asc(entity::post_tag::Column::PostId)
            .all(self.db)
            .await?;

        let mut posts: HashMap<i32, Vec<entity::post::Model>> = HashMap::new();
        for (link, post) in rows {
            if let Some(post) = post {
                posts.entry(link.tag_id).or_default().push(post);
            }
        }

        Ok(posts)
    }
}

async fn link<C: ConnectionTrait>(db: &C, post_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::post_tag::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
