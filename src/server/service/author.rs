use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        author::{AuthorRepository, UNIQUE_SLUG},
        post::PostRepository,
        scoped::translate_violation,
    },
    error::AppError,
    model::author::{
        Author, CreateAuthorParams, UpdateAuthorParams, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    },
    util::{slug, validate},
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all authors of a user ordered by name
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Author>, AppError> {
        let repo = AuthorRepository::new(self.db);

        Ok(repo.get_all(user_id).await?)
    }

    /// Gets one of a user's authors by slug
    pub async fn get_by_slug(&self, user_id: i32, slug: &str) -> Result<Option<Author>, AppError> {
        let repo = AuthorRepository::new(self.db);

        Ok(repo.find_by_slug(user_id, slug).await?)
    }

    /// Creates an author, deriving the slug from the name when omitted.
    pub async fn create(&self, mut params: CreateAuthorParams) -> Result<Author, AppError> {
        validate::required_text("name", &params.name, MAX_NAME_LENGTH)?;
        validate::optional_text(
            "description",
            params.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;

        let slug = slug::resolve(params.slug.take(), &params.name, "name")?;

        let txn = self.db.begin().await?;

        UNIQUE_SLUG
            .ensure_unique(&txn, params.user_id, slug.as_str(), None)
            .await?;
        params.slug = Some(slug);

        let author = AuthorRepository::new(&txn)
            .create(params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG]))?;

        txn.commit().await?;

        Ok(author)
    }

    /// Partially updates one of a user's authors
    /// Returns None if the user has no author with that slug
    pub async fn update(&self, params: UpdateAuthorParams) -> Result<Option<Author>, AppError> {
        if let Some(name) = &params.name {
            validate::required_text("name", name, MAX_NAME_LENGTH)?;
        }
        if let Some(new_slug) = &params.new_slug {
            slug::validate(new_slug)?;
        }
        validate::optional_text(
            "description",
            params.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;

        let txn = self.db.begin().await?;
        let repo = AuthorRepository::new(&txn);

        let Some(existing) = repo.find_by_slug(params.user_id, &params.slug).await? else {
            return Ok(None);
        };

        if let Some(new_slug) = &params.new_slug {
            UNIQUE_SLUG
                .ensure_unique(&txn, params.user_id, new_slug.as_str(), Some(existing.id))
                .await?;
        }

        let author = repo
            .update(existing.id, params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG]))?;

        txn.commit().await?;

        Ok(Some(author))
    }

    /// Deletes one of a user's authors together with their posts
    /// Returns the stored image paths of the removed posts, None if the user has no
    /// author with that slug
    pub async fn delete(&self, user_id: i32, slug: &str) -> Result<Option<Vec<String>>, AppError> {
        let txn = self.db.begin().await?;
        let repo = AuthorRepository::new(&txn);

        let Some(author) = repo.find_by_slug(user_id, slug).await? else {
            return Ok(None);
        };

        let images = PostRepository::new(&txn)
            .image_paths(entity::post::Column::AuthorId, author.id)
            .await?;

        repo.delete(author.id).await?;

        txn.commit().await?;

        Ok(Some(images))
    }
}
