use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    /// Slug of the post the comment belongs to.
    pub post: String,
    pub name: Option<String>,
    pub message: String,
    pub is_visible: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub post: String,
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_visible: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCommentDto {
    /// Moves the comment to another of the caller's posts.
    #[serde(default)]
    pub post: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}
