//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod author;
pub mod category;
pub mod comment;
pub mod post;
pub mod section;
pub mod tag;
pub mod user;
