//! Section factory for creating test section entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sections with customizable fields.
pub struct SectionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::section::Model,
}

impl<'a> SectionFactory<'a> {
    /// Creates a new SectionFactory for the given post with values from fixture.
    ///
    /// The section's owner is taken from the post so both scopes stay consistent.
    pub fn new(db: &'a DatabaseConnection, post: &entity::post::Model) -> Self {
        let entity = fixture::section::entity_builder()
            .user_id(post.user_id)
            .post_id(post.id)
            .build();

        Self { db, entity }
    }

    /// Sets the order value, `None` leaves the column empty.
    pub fn order(mut self, order: Option<i32>) -> Self {
        self.entity.order = order;
        self
    }

    /// Sets the section sub title.
    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.entity.sub_title = Some(sub_title.into());
        self
    }

    /// Sets the section content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    /// Builds and inserts the section entity into the database.
    pub async fn build(self) -> Result<entity::section::Model, DbErr> {
        entity::section::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            post_id: ActiveValue::Set(self.entity.post_id),
            order: ActiveValue::Set(self.entity.order),
            sub_title: ActiveValue::Set(self.entity.sub_title),
            content: ActiveValue::Set(self.entity.content),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a section with the given order in the given post.
pub async fn create_section(
    db: &DatabaseConnection,
    post: &entity::post::Model,
    order: Option<i32>,
) -> Result<entity::section::Model, DbErr> {
    SectionFactory::new(db, post).order(order).build().await
}
