//! Post domain models and parameters.
//!
//! Posts belong to a user and optionally reference one of that user's categories and
//! authors. The detail view adds the ordered sections and the tag names.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::PaginationDto,
        post::{CreatePostDto, PaginatedPostsDto, PostDetailDto, PostDto, UpdatePostDto},
    },
    server::model::{author::Author, category::Category, section::Section},
};

/// Maximum post title length.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum post excerpt length.
pub const MAX_EXCERPT_LENGTH: usize = 1000;

/// Post with its category and author summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: Option<Category>,
    pub author: Option<Author>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub time_read: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Converts entity models to a post domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The post row
    /// - `category` - The referenced category row, if any
    /// - `author` - The referenced author row, if any
    pub fn from_entity(
        entity: entity::post::Model,
        category: Option<entity::category::Model>,
        author: Option<entity::author::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug.unwrap_or_default(),
            category: category.map(Category::from_entity),
            author: author.map(Author::from_entity),
            excerpt: entity.excerpt,
            image: entity.image,
            time_read: entity.time_read,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            title: self.title,
            slug: self.slug,
            category: self.category.map(Category::into_dto),
            author: self.author.map(Author::into_dto),
            excerpt: self.excerpt,
            image: self.image,
            time_read: self.time_read,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Post together with its sections in display order and its tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    pub sections: Vec<Section>,
    pub tags: Vec<String>,
}

impl PostDetail {
    pub fn into_dto(self) -> PostDetailDto {
        PostDetailDto {
            post: self.post.into_dto(),
            sections: self.sections.into_iter().map(Section::into_dto).collect(),
            tags: self.tags,
        }
    }
}

/// One page of the owner's posts, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        PaginatedPostsDto {
            posts: self.posts.into_iter().map(Post::into_dto).collect(),
            pagination: PaginationDto {
                total: self.total,
                page: self.page,
                per_page: self.per_page,
                total_pages: self.total_pages,
            },
        }
    }
}

/// Parameters for creating a post.
///
/// `category` and `author` are slugs resolved within the owner's records.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub user_id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub time_read: Option<i32>,
    pub tags: Vec<String>,
}

impl CreatePostParams {
    pub fn from_dto(user_id: i32, dto: CreatePostDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            slug: dto.slug,
            category: dto.category,
            author: dto.author,
            excerpt: dto.excerpt,
            time_read: dto.time_read,
            tags: dto.tags.unwrap_or_default(),
        }
    }
}

/// Parameters for a partial post update.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub user_id: i32,
    /// Current slug identifying the post.
    pub slug: String,
    pub title: Option<String>,
    pub new_slug: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub time_read: Option<i32>,
    /// Replaces the tag list when present.
    pub tags: Option<Vec<String>>,
}

impl UpdatePostParams {
    pub fn from_dto(user_id: i32, slug: String, dto: UpdatePostDto) -> Self {
        Self {
            user_id,
            slug,
            title: dto.title,
            new_slug: dto.slug,
            category: dto.category,
            author: dto.author,
            excerpt: dto.excerpt,
            time_read: dto.time_read,
            tags: dto.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn embeds_category_summary() {
        let post = fixture::post::entity_builder().category_id(Some(1)).build();
        let category = fixture::category::entity();

        let dto = Post::from_entity(post, Some(category), None).into_dto();

        assert_eq!(dto.slug, "hello-world");
        assert_eq!(dto.category.map(|c| c.slug), Some("shoes".to_string()));
        assert!(dto.author.is_none());
    }

    #[test]
    fn detail_keeps_section_order() {
        let post = Post::from_entity(fixture::post::entity(), None, None);
        let sections = vec![
            Section::from_entity(fixture::section::entity_builder().id(1).order(Some(1)).build()),
            Section::from_entity(fixture::section::entity_builder().id(2).order(Some(2)).build()),
        ];

        let dto = PostDetail {
            post,
            sections,
            tags: vec!["rust".to_string()],
        }
        .into_dto();

        let orders: Vec<_> = dto.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![Some(1), Some(2)]);
        assert_eq!(dto.tags, vec!["rust".to_string()]);
    }
}
