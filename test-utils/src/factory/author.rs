//! Author factory for creating test author entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test authors with customizable fields.
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    slug: Option<String>,
    description: Option<String>,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Author {id}"`
    /// - slug: `"author-{id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Author {}", id),
            slug: Some(format!("author-{}", id)),
            description: None,
        }
    }

    /// Sets the author name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the author slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the author description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the author entity into the database.
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values for the given user.
pub async fn create_author(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db, user_id).build().await
}
