//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating users and API tokens with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("writer@example.com")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .email(format!("user{}@example.com", id))
            .name(format!("User {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets whether the account is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.entity.email),
            name: ActiveValue::Set(self.entity.name),
            is_active: ActiveValue::Set(self.entity.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an API token for the given user.
///
/// The token value is `"token-{id}"` with an auto-incremented id, unique per test run.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user the token authenticates
///
/// # Returns
/// - `Ok(entity::api_token::Model)` - Created token row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_api_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::api_token::Model, DbErr> {
    entity::api_token::ActiveModel {
        token: ActiveValue::Set(format!("token-{}", next_id())),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.email.ends_with("@example.com"));
        assert!(user.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_token_for_user() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(ApiToken)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let first = create_api_token(db, user.id).await?;
        let second = create_api_token(db, user.id).await?;

        assert_eq!(first.user_id, user.id);
        assert_ne!(first.token, second.token);

        Ok(())
    }
}
