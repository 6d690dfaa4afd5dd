//! Category fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating category entity models without database insertion.
//! These are useful for unit testing and for providing consistent default values to the
//! category factory.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Shoes";

/// Default test category slug.
pub const DEFAULT_SLUG: &str = "shoes";

/// Default owning user ID.
pub const DEFAULT_USER_ID: i32 = 1;

/// Default order value (None, left for the ordering assigner).
pub const DEFAULT_ORDER: Option<i32> = None;

/// Creates a category entity model with default values.
///
/// This function creates an in-memory category entity without inserting into the database.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - name: `"Shoes"`
/// - slug: `Some("shoes")`
/// - order: `None`
///
/// # Returns
/// - `category::Model` - In-memory category entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let category = fixture::category::entity();
/// assert_eq!(category.name, "Shoes");
/// assert!(category.order.is_none());
/// ```
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        user_id: DEFAULT_USER_ID,
        name: DEFAULT_NAME.to_string(),
        slug: Some(DEFAULT_SLUG.to_string()),
        order: DEFAULT_ORDER,
    }
}

/// Creates a category entity builder for customization.
///
/// # Returns
/// - `CategoryEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct CategoryEntityBuilder {
    id: i32,
    user_id: i32,
    name: String,
    slug: Option<String>,
    order: Option<i32>,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: DEFAULT_USER_ID,
            name: DEFAULT_NAME.to_string(),
            slug: Some(DEFAULT_SLUG.to_string()),
            order: DEFAULT_ORDER,
        }
    }
}

impl CategoryEntityBuilder {
    /// Sets the category ID.
    ///
    /// # Arguments
    /// - `id` - Category ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning user ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the category name.
    ///
    /// # Arguments
    /// - `name` - Display name for the category
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category slug.
    ///
    /// # Arguments
    /// - `slug` - Slug or `None` for an underived slug
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn slug(mut self, slug: Option<String>) -> Self {
        self.slug = slug;
        self
    }

    /// Sets the order value.
    ///
    /// # Arguments
    /// - `order` - Order value or `None` for an unassigned order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn order(mut self, order: Option<i32>) -> Self {
        self.order = order;
        self
    }

    /// Builds and returns the category entity model.
    ///
    /// # Returns
    /// - `category::Model` - Category entity with configured values
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            slug: self.slug,
            order: self.order,
        }
    }
}
