use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::{CategoryRepository, ORDER, UNIQUE_ORDER, UNIQUE_SLUG},
        post::PostRepository,
        scoped::translate_violation,
    },
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams, MAX_NAME_LENGTH},
    util::{slug, validate},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories of a user in display order
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all(user_id).await?)
    }

    /// Gets one of a user's categories by slug
    pub async fn get_by_slug(&self, user_id: i32, slug: &str) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.find_by_slug(user_id, slug).await?)
    }

    /// Creates a category for a user.
    ///
    /// Derives the slug from the name when omitted and assigns the next free order value
    /// when omitted, then checks both against the user's other categories. Everything runs
    /// in one transaction, so a rejected category leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category with its final slug and order
    /// - `Err(AppError::ValidationErr)` - Invalid field, or slug/order already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, mut params: CreateCategoryParams) -> Result<Category, AppError> {
        validate::required_text("name", &params.name, MAX_NAME_LENGTH)?;
        validate::order(params.order)?;

        let slug = slug::resolve(params.slug.take(), &params.name, "name")?;

        let txn = self.db.begin().await?;

        UNIQUE_SLUG
            .ensure_unique(&txn, params.user_id, slug.as_str(), None)
            .await?;
        params.slug = Some(slug);

        let order = ORDER
            .assign(&txn, &mut params.order, params.user_id)
            .await?;
        UNIQUE_ORDER
            .ensure_unique(&txn, params.user_id, order, None)
            .await?;

        let category = CategoryRepository::new(&txn)
            .create(params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG, &UNIQUE_ORDER]))?;

        txn.commit().await?;

        tracing::debug!(
            "Created category {} with order {:?}",
            category.slug,
            category.order
        );

        Ok(category)
    }

    /// Partially updates one of a user's categories.
    ///
    /// The order value is never recomputed; an explicit new slug or order is checked
    /// against the user's other categories, excluding this one.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The updated category
    /// - `Ok(None)` - The user has no category with that slug
    /// - `Err(AppError::ValidationErr)` - Invalid field, or slug/order already taken
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Option<Category>, AppError> {
        if let Some(name) = &params.name {
            validate::required_text("name", name, MAX_NAME_LENGTH)?;
        }
        if let Some(new_slug) = &params.new_slug {
            slug::validate(new_slug)?;
        }
        validate::order(params.order)?;

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let Some(existing) = repo.find_by_slug(params.user_id, &params.slug).await? else {
            return Ok(None);
        };

        if let Some(new_slug) = &params.new_slug {
            UNIQUE_SLUG
                .ensure_unique(&txn, params.user_id, new_slug.as_str(), Some(existing.id))
                .await?;
        }
        if let Some(order) = params.order {
            UNIQUE_ORDER
                .ensure_unique(&txn, params.user_id, order, Some(existing.id))
                .await?;
        }

        let category = repo
            .update(existing.id, params)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG, &UNIQUE_ORDER]))?;

        txn.commit().await?;

        Ok(Some(category))
    }

    /// Deletes one of a user's categories together with its posts.
    ///
    /// # Returns
    /// - `Ok(Some(images))` - Deleted; stored image paths of the removed posts
    /// - `Ok(None)` - The user has no category with that slug
    pub async fn delete(&self, user_id: i32, slug: &str) -> Result<Option<Vec<String>>, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let Some(category) = repo.find_by_slug(user_id, slug).await? else {
            return Ok(None);
        };

        let images = PostRepository::new(&txn)
            .image_paths(entity::post::Column::CategoryId, category.id)
            .await?;

        repo.delete(category.id).await?;

        txn.commit().await?;

        Ok(Some(images))
    }
}
