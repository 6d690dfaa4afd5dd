//! Section service.
//!
//! Sections are ordered within their post. A section created without an order value is
//! appended after the highest existing one; gaps left by deletions are not reused.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        post::PostRepository,
        scoped::translate_violation,
        section::{SectionRepository, ORDER, UNIQUE_ORDER},
    },
    error::AppError,
    model::{
        post::Post,
        section::{CreateSectionParams, Section, UpdateSectionParams, MAX_SUB_TITLE_LENGTH},
    },
    util::validate,
};

pub struct SectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the sections of one of a user's posts in display order.
    ///
    /// # Returns
    /// - `Ok(Vec<Section>)` - Sections ordered by order value, then id
    /// - `Err(AppError::NotFound)` - The user has no post with that slug
    pub async fn get_all(&self, user_id: i32, post_slug: &str) -> Result<Vec<Section>, AppError> {
        let post = find_post(self.db, user_id, post_slug).await?;

        Ok(SectionRepository::new(self.db).get_by_post(post.id).await?)
    }

    /// Gets a section of one of a user's posts
    pub async fn get_by_id(
        &self,
        user_id: i32,
        post_slug: &str,
        id: i32,
    ) -> Result<Option<Section>, AppError> {
        let post = find_post(self.db, user_id, post_slug).await?;

        Ok(SectionRepository::new(self.db)
            .find_by_id(post.id, id)
            .await?)
    }

    /// Creates a section in one of a user's posts.
    ///
    /// Assigns the next order value of the post when omitted, then checks the (possibly
    /// just assigned) value against the post's other sections.
    ///
    /// # Returns
    /// - `Ok(Section)` - The created section with its final order value
    /// - `Err(AppError::NotFound)` - The user has no post with that slug
    /// - `Err(AppError::ValidationErr)` - Invalid field or order already taken
    pub async fn create(&self, mut params: CreateSectionParams) -> Result<Section, AppError> {
        validate::order(params.order)?;
        validate::optional_text("sub_title", params.sub_title.as_deref(), MAX_SUB_TITLE_LENGTH)?;
        validate::required("content", &params.content)?;

        let txn = self.db.begin().await?;

        let post = find_post(&txn, params.user_id, &params.post_slug).await?;

        let order = ORDER.assign(&txn, &mut params.order, post.id).await?;
        UNIQUE_ORDER
            .ensure_unique(&txn, post.id, order, None)
            .await?;

        let section = SectionRepository::new(&txn)
            .create(post.id, params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_ORDER]))?;

        txn.commit().await?;

        tracing::debug!(
            "Created section {} in post {} with order {}",
            section.id,
            post.slug,
            order
        );

        Ok(section)
    }

    /// Partially updates a section of one of a user's posts
    /// Returns None if the post has no section with that id
    pub async fn update(&self, params: UpdateSectionParams) -> Result<Option<Section>, AppError> {
        validate::order(params.order)?;
        validate::optional_text("sub_title", params.sub_title.as_deref(), MAX_SUB_TITLE_LENGTH)?;
        if let Some(content) = &params.content {
            validate::required("content", content)?;
        }

        let txn = self.db.begin().await?;

        let post = find_post(&txn, params.user_id, &params.post_slug).await?;
        let repo = SectionRepository::new(&txn);

        let Some(existing) = repo.find_by_id(post.id, params.id).await? else {
            return Ok(None);
        };

        if let Some(order) = params.order {
            UNIQUE_ORDER
                .ensure_unique(&txn, post.id, order, Some(existing.id))
                .await?;
        }

        let section = repo
            .update(existing.id, params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_ORDER]))?;

        txn.commit().await?;

        Ok(Some(section))
    }

    /// Deletes a section of one of a user's posts
    /// Returns true if deleted, false if the post has no section with that id
    pub async fn delete(&self, user_id: i32, post_slug: &str, id: i32) -> Result<bool, AppError> {
        let post = find_post(self.db, user_id, post_slug).await?;
        let repo = SectionRepository::new(self.db);

        if repo.find_by_id(post.id, id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

async fn find_post<C: ConnectionTrait>(db: &C, user_id: i32, slug: &str) -> Result<Post, AppError> {
    PostRepository::new(db)
        .find_by_slug(user_id, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
}
