//! Post fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::post;

/// Default test post title.
pub const DEFAULT_TITLE: &str = "Hello World";

/// Default test post slug.
pub const DEFAULT_SLUG: &str = "hello-world";

/// Default owning user ID.
pub const DEFAULT_USER_ID: i32 = 1;

/// Creates a post entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - title: `"Hello World"`
/// - slug: `Some("hello-world")`
/// - no category, author, excerpt, image or reading time
/// - timestamps: Unix epoch
pub fn entity() -> post::Model {
    entity_builder().build()
}

/// Creates a post entity builder for customization.
pub fn entity_builder() -> PostEntityBuilder {
    PostEntityBuilder::default()
}

/// Builder for creating customized post entity models.
pub struct PostEntityBuilder {
    id: i32,
    user_id: i32,
    category_id: Option<i32>,
    author_id: Option<i32>,
    title: String,
    slug: Option<String>,
    excerpt: Option<String>,
    image: Option<String>,
    time_read: Option<i32>,
    created_at: DateTime<Utc>,
}

impl Default for PostEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: DEFAULT_USER_ID,
            category_id: None,
            author_id: None,
            title: DEFAULT_TITLE.to_string(),
            slug: Some(DEFAULT_SLUG.to_string()),
            excerpt: None,
            image: None,
            time_read: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl PostEntityBuilder {
    /// Sets the post ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the category ID.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the author ID.
    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the post slug.
    pub fn slug(mut self, slug: Option<String>) -> Self {
        self.slug = slug;
        self
    }

    /// Sets the post excerpt.
    pub fn excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = excerpt;
        self
    }

    /// Sets the stored image path.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Sets the estimated reading time in minutes.
    pub fn time_read(mut self, time_read: Option<i32>) -> Self {
        self.time_read = time_read;
        self
    }

    /// Builds and returns the post entity model.
    pub fn build(self) -> post::Model {
        post::Model {
            id: self.id,
            user_id: self.user_id,
            category_id: self.category_id,
            author_id: self.author_id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            image: self.image,
            time_read: self.time_read,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
