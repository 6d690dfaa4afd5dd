//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::image::ImageStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool, and `ImageStorage` only holds the media root path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Filesystem store for uploaded post images.
    pub media: ImageStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, media: ImageStorage) -> Self {
        Self { db, media }
    }
}
