use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    /// Slugs of the posts carrying this tag.
    pub posts: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTagDto {
    pub name: String,
    #[serde(default)]
    pub posts: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateTagDto {
    #[serde(default)]
    pub name: Option<String>,
    /// Replaces the full post list when present.
    #[serde(default)]
    pub posts: Option<Vec<String>>,
}
