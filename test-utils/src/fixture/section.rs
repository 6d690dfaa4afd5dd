//! Section fixtures for creating in-memory test data.

use entity::section;

/// Default test section content.
pub const DEFAULT_CONTENT: &str = "Some section content.";

/// Creates a section entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - post_id: `1`
/// - order: `None`
/// - sub_title: `None`
/// - content: `"Some section content."`
pub fn entity() -> section::Model {
    entity_builder().build()
}

/// Creates a section entity builder for customization.
pub fn entity_builder() -> SectionEntityBuilder {
    SectionEntityBuilder::default()
}

/// Builder for creating customized section entity models.
pub struct SectionEntityBuilder {
    id: i32,
    user_id: i32,
    post_id: i32,
    order: Option<i32>,
    sub_title: Option<String>,
    content: String,
}

impl Default for SectionEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            post_id: 1,
            order: None,
            sub_title: None,
            content: DEFAULT_CONTENT.to_string(),
        }
    }
}

impl SectionEntityBuilder {
    /// Sets the section ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the parent post ID.
    pub fn post_id(mut self, post_id: i32) -> Self {
        self.post_id = post_id;
        self
    }

    /// Sets the order value.
    pub fn order(mut self, order: Option<i32>) -> Self {
        self.order = order;
        self
    }

    /// Sets the sub title.
    pub fn sub_title(mut self, sub_title: Option<String>) -> Self {
        self.sub_title = sub_title;
        self
    }

    /// Builds and returns the section entity model.
    pub fn build(self) -> section::Model {
        section::Model {
            id: self.id,
            user_id: self.user_id,
            post_id: self.post_id,
            order: self.order,
            sub_title: self.sub_title,
            content: self.content,
        }
    }
}
