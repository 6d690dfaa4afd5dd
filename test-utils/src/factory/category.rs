//! Category factory for creating test category entities.
//!
//! Categories are scoped to their owning user. The factory does not assign an order value
//! unless one is given, so tests can exercise the ordering logic from a known state.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db, user.id)
///     .name("Travel")
///     .slug("travel")
///     .order(Some(5))
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values from fixture.
    ///
    /// The name and slug get a unique suffix so several categories can be created for
    /// the same user without tripping the scoped slug index.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `CategoryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::category::entity_builder()
            .user_id(user_id)
            .name(format!("Category {}", id))
            .slug(Some(format!("category-{}", id)))
            .build();

        Self { db, entity }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the category slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = Some(slug.into());
        self
    }

    /// Sets the order value, `None` leaves the column empty.
    pub fn order(mut self, order: Option<i32>) -> Self {
        self.entity.order = order;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            name: ActiveValue::Set(self.entity.name),
            slug: ActiveValue::Set(self.entity.slug),
            order: ActiveValue::Set(self.entity.order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values for the given user.
///
/// Shorthand for `CategoryFactory::new(db, user_id).build().await`.
pub async fn create_category(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_multiple_unique_categories() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let first = create_category(db, user.id).await?;
        let second = create_category(db, user.id).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);
        assert!(first.order.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_order_for_same_user() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        CategoryFactory::new(db, user.id)
            .order(Some(3))
            .build()
            .await?;
        let duplicate = CategoryFactory::new(db, user.id)
            .order(Some(3))
            .build()
            .await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
