//! Request and response DTOs shared by the HTTP layer.

pub mod api;
pub mod author;
pub mod category;
pub mod comment;
pub mod post;
pub mod section;
pub mod tag;
pub mod user;
