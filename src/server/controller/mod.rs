//! HTTP request handlers.
//!
//! Controllers authenticate the request, convert DTOs into operation parameters, call the
//! matching service and convert the returned domain model back into a DTO. Missing
//! targets come back from the services as `None` and are answered with 404 here.

pub mod auth;
pub mod author;
pub mod category;
pub mod comment;
pub mod post;
pub mod section;
pub mod tag;
