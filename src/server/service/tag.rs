use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        post::PostRepository,
        scoped::translate_violation,
        tag::{TagRepository, UNIQUE_NAME},
    },
    error::AppError,
    model::tag::{CreateTagParams, Tag, UpdateTagParams, MAX_NAME_LENGTH},
    util::validate,
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tags of a user with their post slugs
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all(user_id).await?)
    }

    /// Gets one of a user's tags with its post slugs
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Option<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_by_id(user_id, id).await?)
    }

    /// Creates a tag and attaches it to the given posts of the same user.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The created tag
    /// - `Err(AppError::NotFound)` - One of the post slugs is unknown for this user
    /// - `Err(AppError::ValidationErr)` - Invalid or duplicate name
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        validate::required_text("name", &params.name, MAX_NAME_LENGTH)?;

        let txn = self.db.begin().await?;
        let repo = TagRepository::new(&txn);

        UNIQUE_NAME
            .ensure_unique(&txn, params.user_id, params.name.as_str(), None)
            .await?;

        let post_ids = resolve_posts(&txn, params.user_id, &params.posts).await?;

        let tag = repo
            .create(params.user_id, params.name)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_NAME]))?;
        repo.set_posts(tag.id, &post_ids).await?;

        let tag = repo
            .get_by_id(params.user_id, tag.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Tag {} vanished after creation", tag.id)))?;

        txn.commit().await?;

        Ok(tag)
    }

    /// Renames a tag and/or replaces its posts
    /// Returns None if the user has no tag with that id
    pub async fn update(&self, params: UpdateTagParams) -> Result<Option<Tag>, AppError> {
        if let Some(name) = &params.name {
            validate::required_text("name", name, MAX_NAME_LENGTH)?;
        }

        let txn = self.db.begin().await?;
        let repo = TagRepository::new(&txn);

        let Some(existing) = repo.find_by_id(params.user_id, params.id).await? else {
            return Ok(None);
        };

        if let Some(name) = params.name {
            UNIQUE_NAME
                .ensure_unique(&txn, params.user_id, name.as_str(), Some(existing.id))
                .await?;
            repo.rename(existing.id, name)
                .await
                .map_err(|e| translate_violation(e, &[&UNIQUE_NAME]))?;
        }

        if let Some(posts) = &params.posts {
            let post_ids = resolve_posts(&txn, params.user_id, posts).await?;
            repo.set_posts(existing.id, &post_ids).await?;
        }

        let tag = repo.get_by_id(params.user_id, existing.id).await?;

        txn.commit().await?;

        Ok(tag)
    }

    /// Deletes one of a user's tags
    /// Returns true if deleted, false if the user has no tag with that id
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.find_by_id(user_id, id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

/// Resolves post slugs to IDs within the user's posts, rejecting unknown slugs.
async fn resolve_posts<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    slugs: &[String],
) -> Result<Vec<i32>, AppError> {
    let wanted: BTreeSet<&String> = slugs.iter().collect();
    let posts = PostRepository::new(db).find_by_slugs(user_id, slugs).await?;

    if posts.len() != wanted.len() {
        let found: BTreeSet<String> = posts.iter().filter_map(|post| post.slug.clone()).collect();
        let missing = wanted
            .into_iter()
            .find(|slug| !found.contains(*slug))
            .cloned()
            .unwrap_or_default();

        return Err(AppError::NotFound(format!("Post '{}' not found", missing)));
    }

    Ok(posts.into_iter().map(|post| post.id).collect())
}
