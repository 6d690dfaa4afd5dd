//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so services can run several of them
//! inside one transaction.
//!
//! The `scoped` module holds the ordering and uniqueness rules; each entity module declares
//! its own bindings next to its repository.

pub mod author;
pub mod category;
pub mod comment;
pub mod post;
pub mod scoped;
pub mod section;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
