use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::PaginationDto, author::AuthorDto, category::CategoryDto, section::SectionDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostDto {
    pub title: String,
    pub slug: String,
    pub category: Option<CategoryDto>,
    pub author: Option<AuthorDto>,
    pub excerpt: Option<String>,
    /// Path of the uploaded image relative to the media root.
    pub image: Option<String>,
    pub time_read: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub sections: Vec<SectionDto>,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Slug of one of the caller's categories.
    #[serde(default)]
    pub category: Option<String>,
    /// Slug of one of the caller's authors.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub time_read: Option<i32>,
    /// Tag names, created for the caller when missing.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePostDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub time_read: Option<i32>,
    /// Replaces the full tag list when present.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Multipart form of the post image upload.
#[derive(ToSchema)]
pub struct PostImageUploadDto {
    /// Image file; jpg, jpeg, png, gif or webp.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
