//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test domain conversions without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let category = fixture::category::entity();
//!
//! // Create with custom fields
//! let travel = fixture::category::entity_builder()
//!     .name("Travel")
//!     .order(Some(5))
//!     .build();
//! ```

pub mod category;
pub mod post;
pub mod section;
pub mod user;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use post::{entity as post_entity, entity_builder as post_entity_builder};
pub use section::{entity as section_entity, entity_builder as section_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
