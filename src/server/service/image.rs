//! Storage of uploaded post images.
//!
//! Images live on the local filesystem below the configured media root, under
//! `uploads/post/<uuid>.<ext>`. Posts only record the relative path.

use std::path::{Component, Path, PathBuf};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::{validation::ValidationError, AppError},
    model::post::Post,
    service::post::PostService,
};

/// Directory below the media root that holds post images.
pub const POST_IMAGE_DIR: &str = "uploads/post";

/// File extensions accepted for uploaded images, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Filesystem store for uploaded images rooted at the media directory.
#[derive(Clone, Debug)]
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes an uploaded image under a freshly generated name.
    ///
    /// # Arguments
    /// - `file_name` - Client-side file name, only its extension is used
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file relative to the media root
    /// - `Err(AppError::ValidationErr)` - Empty file or extension not an accepted image type
    /// - `Err(AppError::IoErr)` - Failed to create the directory or write the file
    pub async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let extension = image_extension(file_name)?;

        if bytes.is_empty() {
            return Err(ValidationError::UnsupportedImage("empty file".to_string()).into());
        }

        let dir = self.root.join(POST_IMAGE_DIR);
        tokio::fs::create_dir_all(&dir).await?;

        let relative = format!("{}/{}.{}", POST_IMAGE_DIR, uuid::Uuid::new_v4(), extension);
        tokio::fs::write(self.root.join(&relative), bytes).await?;

        tracing::debug!("Stored image {} ({} bytes)", relative, bytes.len());

        Ok(relative)
    }

    /// Removes a previously stored image. A file that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> Result<(), std::io::Error> {
        if !is_contained(relative) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("refusing to remove {} outside the media root", relative),
            ));
        }

        match tokio::fs::remove_file(self.root.join(relative)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Best-effort removal of a replaced or orphaned image, failures are only logged.
    pub async fn discard(&self, relative: Option<String>) {
        let Some(relative) = relative else {
            return;
        };

        if let Err(e) = self.remove(&relative).await {
            tracing::warn!("Failed to remove image {}: {}", relative, e);
        }
    }

    /// Discards the images of posts removed together with their category or author.
    pub async fn discard_all(&self, images: Vec<String>) {
        for relative in images {
            self.discard(Some(relative)).await;
        }
    }
}

/// Lowercased extension of `file_name` if it is an accepted image type.
fn image_extension(file_name: &str) -> Result<String, ValidationError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| ValidationError::UnsupportedImage(file_name.to_string()))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedImage(extension));
    }

    Ok(extension)
}

/// Whether `relative` stays below the root it is joined to.
fn is_contained(relative: &str) -> bool {
    let path = Path::new(relative);

    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    /// Replaces the image of one of a user's posts.
    ///
    /// The new file is written first; if recording it on the post fails the file is
    /// removed again. The replaced image is removed only after the post points at the new
    /// one.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post with its new image path
    /// - `Ok(None)` - The user has no post with that slug
    /// - `Err(AppError::ValidationErr)` - Not an accepted image
    pub async fn upload(
        &self,
        user_id: i32,
        slug: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Option<Post>, AppError> {
        if PostRepository::new(self.db)
            .find_by_slug(user_id, slug)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let stored = self.storage.store(file_name, bytes).await?;

        let result = PostService::new(self.db)
            .set_image(user_id, slug, stored.clone())
            .await;

        match result {
            Ok(Some((post, previous))) => {
                self.storage.discard(previous).await;

                tracing::info!("Updated image of post {} to {}", slug, stored);

                Ok(Some(post))
            }
            Ok(None) => {
                self.storage.discard(Some(stored)).await;

                Ok(None)
            }
            Err(e) => {
                self.storage.discard(Some(stored)).await;

                Err(e)
            }
        }
    }
}
