use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::comment::{
        Comment, CreateCommentParams, UpdateCommentParams, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
    },
    util::validate,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's comments, optionally only those of one post.
    ///
    /// An unknown post slug yields an empty list.
    pub async fn get_all(
        &self,
        user_id: i32,
        post_slug: Option<&str>,
    ) -> Result<Vec<Comment>, AppError> {
        let post_id = match post_slug {
            Some(slug) => match PostRepository::new(self.db).find_by_slug(user_id, slug).await? {
                Some(post) => Some(post.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        Ok(CommentRepository::new(self.db)
            .get_all(user_id, post_id)
            .await?)
    }

    /// Gets one of a user's comments
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .find_by_id(user_id, id)
            .await?)
    }

    /// Creates a comment on one of a user's posts.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - The user has no post with that slug
    /// - `Err(AppError::ValidationErr)` - Missing message or field too long
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        validate::required_text("message", &params.message, MAX_MESSAGE_LENGTH)?;
        validate::optional_text("name", params.name.as_deref(), MAX_NAME_LENGTH)?;

        let post_id = self.resolve_post(params.user_id, &params.post_slug).await?;

        Ok(CommentRepository::new(self.db)
            .create(post_id, params)
            .await?)
    }

    /// Partially updates one of a user's comments, possibly moving it to another post
    /// Returns None if the user has no comment with that id
    pub async fn update(&self, params: UpdateCommentParams) -> Result<Option<Comment>, AppError> {
        if let Some(message) = &params.message {
            validate::required_text("message", message, MAX_MESSAGE_LENGTH)?;
        }
        validate::optional_text("name", params.name.as_deref(), MAX_NAME_LENGTH)?;

        let repo = CommentRepository::new(self.db);

        if repo.find_by_id(params.user_id, params.id).await?.is_none() {
            return Ok(None);
        }

        let post_id = match &params.post_slug {
            Some(slug) => Some(self.resolve_post(params.user_id, slug).await?),
            None => None,
        };

        Ok(Some(repo.update(params.id, post_id, params).await?))
    }

    /// Deletes one of a user's comments
    /// Returns true if deleted, false if the user has no comment with that id
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = CommentRepository::new(self.db);

        if repo.find_by_id(user_id, id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn resolve_post(&self, user_id: i32, slug: &str) -> Result<i32, AppError> {
        PostRepository::new(self.db)
            .find_by_slug(user_id, slug)
            .await?
            .map(|post| post.id)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }
}
