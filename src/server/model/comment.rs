//! Comment domain models and parameters.
//!
//! Comments carry no uniqueness rule; the same visitor may post the same message twice.

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto};

/// Maximum commenter name length.
pub const MAX_NAME_LENGTH: usize = 150;

/// Maximum comment message length.
pub const MAX_MESSAGE_LENGTH: usize = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    /// Slug of the post the comment belongs to.
    pub post: String,
    pub name: Option<String>,
    pub message: String,
    pub is_visible: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Comment {
    /// Converts the comment row into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The comment row
    /// - `post` - The post row the comment belongs to, if loaded
    pub fn from_entity(entity: entity::comment::Model, post: Option<entity::post::Model>) -> Self {
        Self {
            id: entity.id,
            post: post.and_then(|post| post.slug).unwrap_or_default(),
            name: entity.name,
            message: entity.message,
            is_visible: entity.is_visible,
            date_created: entity.date_created,
            date_updated: entity.date_updated,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post: self.post,
            name: self.name,
            message: self.message,
            is_visible: self.is_visible,
            date_created: self.date_created,
            date_updated: self.date_updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub user_id: i32,
    pub post_slug: String,
    pub name: Option<String>,
    pub message: String,
    pub is_visible: bool,
}

impl CreateCommentParams {
    pub fn from_dto(user_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            user_id,
            post_slug: dto.post,
            name: dto.name,
            message: dto.message,
            is_visible: dto.is_visible,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub user_id: i32,
    pub id: i32,
    /// Moves the comment to this post when present.
    pub post_slug: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
    pub is_visible: Option<bool>,
}

impl UpdateCommentParams {
    pub fn from_dto(user_id: i32, id: i32, dto: UpdateCommentDto) -> Self {
        Self {
            user_id,
            id,
            post_slug: dto.post,
            name: dto.name,
            message: dto.message,
            is_visible: dto.is_visible,
        }
    }
}
