//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly, bypassing the
//! repositories, so they can also set up states the application would refuse to create.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, post) = factory::helpers::create_post_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let category = factory::category::CategoryFactory::new(&db, user.id)
//!     .name("Travel")
//!     .slug("travel")
//!     .order(Some(5))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create users and their API tokens
//! - `category` - Create owner-scoped categories
//! - `author` - Create owner-scoped authors
//! - `post` - Create owner-scoped posts
//! - `section` - Create post-scoped sections
//! - `tag` - Create owner-scoped tags and post links
//! - `comment` - Create comments on posts
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod author;
pub mod category;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod section;
pub mod tag;
pub mod user;

pub use author::create_author;
pub use category::create_category;
pub use comment::create_comment;
pub use post::create_post;
pub use section::create_section;
pub use tag::{create_tag, link_tag};
pub use user::{create_api_token, create_user};
