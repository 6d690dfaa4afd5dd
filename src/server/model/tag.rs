//! Tag domain models and parameters.

use crate::model::tag::{CreateTagDto, TagDto, UpdateTagDto};

/// Maximum tag name length.
pub const MAX_NAME_LENGTH: usize = 100;

/// Tag with the slugs of the posts it is attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub posts: Vec<String>,
}

impl Tag {
    /// Converts the tag row and its linked post rows into a domain model.
    pub fn from_entity(entity: entity::tag::Model, posts: Vec<entity::post::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            posts: posts.into_iter().filter_map(|post| post.slug).collect(),
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            posts: self.posts,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub user_id: i32,
    pub name: String,
    /// Post slugs to attach the tag to.
    pub posts: Vec<String>,
}

impl CreateTagParams {
    pub fn from_dto(user_id: i32, dto: CreateTagDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            posts: dto.posts,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTagParams {
    pub user_id: i32,
    pub id: i32,
    pub name: Option<String>,
    pub posts: Option<Vec<String>>,
}

impl UpdateTagParams {
    pub fn from_dto(user_id: i32, id: i32, dto: UpdateTagDto) -> Self {
        Self {
            user_id,
            id,
            name: dto.name,
            posts: dto.posts,
        }
    }
}
