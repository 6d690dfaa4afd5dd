//! User fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "writer@example.com";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test Writer";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"writer@example.com"`
/// - name: `"Test Writer"`
/// - is_active: `true`
/// - created_at: Unix epoch
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: String,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            email: DEFAULT_EMAIL.to_string(),
            name: DEFAULT_NAME.to_string(),
            is_active: true,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the user email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the account is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            email: self.email,
            name: self.name,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
