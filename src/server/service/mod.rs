//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Checking field rules before anything is written
//! - **Scoped rules**: Assigning order values and enforcing per-scope uniqueness
//! - **Transactions**: Running check-then-write sequences inside one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod author;
pub mod category;
pub mod comment;
pub mod image;
pub mod post;
pub mod section;
pub mod tag;

#[cfg(test)]
mod test;
