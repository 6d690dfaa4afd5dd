//! Post section domain models and parameters.
//!
//! Sections are the ordered body blocks of a post. Their order value is scoped to the
//! parent post and assigned at creation when omitted.

use crate::model::section::{CreateSectionDto, SectionDto, UpdateSectionDto};

/// Maximum section sub title length.
pub const MAX_SUB_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: i32,
    pub post_id: i32,
    /// Display position within the parent post.
    pub order: Option<i32>,
    pub sub_title: Option<String>,
    pub content: String,
}

impl Section {
    /// Converts an entity model to a section domain model at the repository boundary.
    pub fn from_entity(entity: entity::section::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            order: entity.order,
            sub_title: entity.sub_title,
            content: entity.content,
        }
    }

    pub fn into_dto(self) -> SectionDto {
        SectionDto {
            id: self.id,
            order: self.order,
            sub_title: self.sub_title,
            content: self.content,
        }
    }
}

/// Parameters for creating a section in one of the owner's posts.
#[derive(Debug, Clone)]
pub struct CreateSectionParams {
    pub user_id: i32,
    /// Slug of the parent post.
    pub post_slug: String,
    pub order: Option<i32>,
    pub sub_title: Option<String>,
    pub content: String,
}

impl CreateSectionParams {
    pub fn from_dto(user_id: i32, post_slug: String, dto: CreateSectionDto) -> Self {
        Self {
            user_id,
            post_slug,
            order: dto.order,
            sub_title: dto.sub_title,
            content: dto.content,
        }
    }
}

/// Parameters for a partial section update.
#[derive(Debug, Clone)]
pub struct UpdateSectionParams {
    pub user_id: i32,
    pub post_slug: String,
    pub id: i32,
    pub order: Option<i32>,
    pub sub_title: Option<String>,
    pub content: Option<String>,
}

impl UpdateSectionParams {
    pub fn from_dto(user_id: i32, post_slug: String, id: i32, dto: UpdateSectionDto) -> Self {
        Self {
            user_id,
            post_slug,
            id,
            order: dto.order,
            sub_title: dto.sub_title,
            content: dto.content,
        }
    }
}
