//! Post factory for creating test post entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, user.id)
///     .title("First Post")
///     .category_id(Some(category.id))
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::post::Model,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values from fixture.
    ///
    /// The title and slug get a unique suffix per created post.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::post::entity_builder()
            .user_id(user_id)
            .title(format!("Post {}", id))
            .slug(Some(format!("post-{}", id)))
            .build();

        Self { db, entity }
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the post slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = Some(slug.into());
        self
    }

    /// Sets the category the post is filed under.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.entity.category_id = category_id;
        self
    }

    /// Sets the post author.
    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.entity.author_id = author_id;
        self
    }

    /// Sets the stored image path.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.entity.image = image;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            category_id: ActiveValue::Set(self.entity.category_id),
            author_id: ActiveValue::Set(self.entity.author_id),
            title: ActiveValue::Set(self.entity.title),
            slug: ActiveValue::Set(self.entity.slug),
            excerpt: ActiveValue::Set(self.entity.excerpt),
            image: ActiveValue::Set(self.entity.image),
            time_read: ActiveValue::Set(self.entity.time_read),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given user.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, user_id).build().await
}
