//! Author domain models and parameters.

use crate::model::author::{AuthorDetailDto, AuthorDto, CreateAuthorDto, UpdateAuthorDto};

/// Maximum author name length.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum author description length.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Author owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl Author {
    /// Converts an entity model to an author domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug.unwrap_or_default(),
            description: entity.description,
        }
    }

    /// Converts to the short DTO used in lists and embedded in posts.
    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            name: self.name,
            slug: self.slug,
        }
    }

    /// Converts to the detail DTO including the description.
    pub fn into_detail_dto(self) -> AuthorDetailDto {
        AuthorDetailDto {
            name: self.name,
            slug: self.slug,
            description: self.description,
        }
    }
}

/// Parameters for creating an author.
#[derive(Debug, Clone)]
pub struct CreateAuthorParams {
    pub user_id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CreateAuthorParams {
    pub fn from_dto(user_id: i32, dto: CreateAuthorDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
        }
    }
}

/// Parameters for a partial author update.
#[derive(Debug, Clone)]
pub struct UpdateAuthorParams {
    pub user_id: i32,
    /// Current slug identifying the author.
    pub slug: String,
    pub name: Option<String>,
    pub new_slug: Option<String>,
    pub description: Option<String>,
}

impl UpdateAuthorParams {
    pub fn from_dto(user_id: i32, slug: String, dto: UpdateAuthorDto) -> Self {
        Self {
            user_id,
            slug,
            name: dto.name,
            new_slug: dto.slug,
            description: dto.description,
        }
    }
}
