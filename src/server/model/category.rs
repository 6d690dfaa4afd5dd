//! Category domain models and parameters.
//!
//! Categories group a user's posts and carry a user-defined display order. The order
//! value is assigned at creation when omitted and is never recomputed afterwards.

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

/// Maximum category name length.
pub const MAX_NAME_LENGTH: usize = 200;

/// Category owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    /// Display position among the owner's categories.
    pub order: Option<i32>,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug.unwrap_or_default(),
            order: entity.order,
        }
    }

    /// Converts the category domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            name: self.name,
            slug: self.slug,
            order: self.order,
        }
    }
}

/// Parameters for creating a category.
///
/// `slug` and `order` start as the caller supplied them and are filled in by the
/// service before the row is written.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub user_id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub order: Option<i32>,
}

impl CreateCategoryParams {
    /// Converts a create DTO into parameters for the given owner.
    pub fn from_dto(user_id: i32, dto: CreateCategoryDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            slug: dto.slug,
            order: dto.order,
        }
    }
}

/// Parameters for a partial category update.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub user_id: i32,
    /// Current slug identifying the category.
    pub slug: String,
    pub name: Option<String>,
    pub new_slug: Option<String>,
    pub order: Option<i32>,
}

impl UpdateCategoryParams {
    /// Converts an update DTO into parameters for the category identified by `slug`.
    pub fn from_dto(user_id: i32, slug: String, dto: UpdateCategoryDto) -> Self {
        Self {
            user_id,
            slug,
            name: dto.name,
            new_slug: dto.slug,
            order: dto.order,
        }
    }
}
