use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SectionDto {
    pub id: i32,
    pub order: Option<i32>,
    pub sub_title: Option<String>,
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSectionDto {
    /// Next free position in the post when omitted.
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub sub_title: Option<String>,
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateSectionDto {
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
