//! Post service.
//!
//! Resolves category, author and tag references within the owner's records and keeps the
//! post, its tag links and the slug check inside one transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        author::AuthorRepository,
        category::CategoryRepository,
        post::{PostRepository, UNIQUE_SLUG},
        scoped::translate_violation,
        section::SectionRepository,
        tag::{TagRepository, UNIQUE_NAME},
    },
    error::AppError,
    model::{
        post::{
            CreatePostParams, PaginatedPosts, Post, PostDetail, UpdatePostParams,
            MAX_EXCERPT_LENGTH, MAX_TITLE_LENGTH,
        },
        tag::MAX_NAME_LENGTH as MAX_TAG_NAME_LENGTH,
    },
    util::{slug, validate},
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated posts for a user with counts
    ///
    /// Returns `AppError::BadRequest` when the page starts past the largest offset the
    /// database accepts.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPosts, AppError> {
        match page.checked_mul(per_page) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(AppError::BadRequest(format!("Page {} is out of range", page))),
        }

        let repo = PostRepository::new(self.db);

        let (posts, total) = repo.get_paginated(user_id, page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedPosts {
            posts,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one of a user's posts with its sections and tags
    pub async fn get_by_slug(
        &self,
        user_id: i32,
        slug: &str,
    ) -> Result<Option<PostDetail>, AppError> {
        let repo = PostRepository::new(self.db);

        let Some(post) = repo.find_by_slug(user_id, slug).await? else {
            return Ok(None);
        };

        Ok(Some(load_detail(self.db, post).await?))
    }

    /// Creates a post for a user.
    ///
    /// The slug is derived from the title when omitted. Category and author slugs must
    /// name records of the same user; tag names are attached, creating missing tags.
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - The created post
    /// - `Err(AppError::NotFound)` - Unknown category or author slug
    /// - `Err(AppError::ValidationErr)` - Invalid field or slug already taken
    pub async fn create(&self, mut params: CreatePostParams) -> Result<PostDetail, AppError> {
        validate_fields(
            Some(&params.title),
            params.excerpt.as_deref(),
            params.time_read,
            Some(&params.tags),
        )?;

        let slug = slug::resolve(params.slug.take(), &params.title, "title")?;

        let txn = self.db.begin().await?;

        UNIQUE_SLUG
            .ensure_unique(&txn, params.user_id, slug.as_str(), None)
            .await?;
        params.slug = Some(slug);

        let category_id = resolve_category(&txn, params.user_id, params.category.as_deref()).await?;
        let author_id = resolve_author(&txn, params.user_id, params.author.as_deref()).await?;

        let post = PostRepository::new(&txn)
            .create(&params, category_id, author_id)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG]))?;

        attach_tags(&txn, params.user_id, post.id, &params.tags).await?;

        let detail = load_detail(&txn, post).await?;

        txn.commit().await?;

        Ok(detail)
    }

    /// Partially updates one of a user's posts
    /// Returns None if the user has no post with that slug
    pub async fn update(&self, params: UpdatePostParams) -> Result<Option<PostDetail>, AppError> {
        validate_fields(
            params.title.as_ref(),
            params.excerpt.as_deref(),
            params.time_read,
            params.tags.as_ref(),
        )?;
        if let Some(new_slug) = &params.new_slug {
            slug::validate(new_slug)?;
        }

        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let Some(existing) = repo.find_by_slug(params.user_id, &params.slug).await? else {
            return Ok(None);
        };

        if let Some(new_slug) = &params.new_slug {
            UNIQUE_SLUG
                .ensure_unique(&txn, params.user_id, new_slug.as_str(), Some(existing.id))
                .await?;
        }

        let category_id = resolve_category(&txn, params.user_id, params.category.as_deref()).await?;
        let author_id = resolve_author(&txn, params.user_id, params.author.as_deref()).await?;

        let user_id = params.user_id;
        let tags = params.tags.clone();

        let post = repo
            .update(existing.id, params, category_id, author_id)
            .await
            .map_err(|e| translate_violation(e, &[&UNIQUE_SLUG]))?;

        if let Some(tags) = tags {
            attach_tags(&txn, user_id, post.id, &tags).await?;
        }

        let detail = load_detail(&txn, post).await?;

        txn.commit().await?;

        Ok(Some(detail))
    }

    /// Records a new image path on one of a user's posts.
    ///
    /// # Returns
    /// - `Ok(Some((post, previous)))` - Updated post and the image path it replaced
    /// - `Ok(None)` - The user has no post with that slug
    pub async fn set_image(
        &self,
        user_id: i32,
        slug: &str,
        image: String,
    ) -> Result<Option<(Post, Option<String>)>, AppError> {
        let repo = PostRepository::new(self.db);

        let Some(existing) = repo.find_by_slug(user_id, slug).await? else {
            return Ok(None);
        };

        let post = repo.set_image(existing.id, Some(image)).await?;

        Ok(Some((post, existing.image)))
    }

    /// Deletes one of a user's posts with its sections, comments and tag links
    /// Returns the deleted post, or None if the user has no post with that slug
    pub async fn delete(&self, user_id: i32, slug: &str) -> Result<Option<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        let Some(post) = repo.find_by_slug(user_id, slug).await? else {
            return Ok(None);
        };

        repo.delete(post.id).await?;

        Ok(Some(post))
    }
}

fn validate_fields(
    title: Option<&String>,
    excerpt: Option<&str>,
    time_read: Option<i32>,
    tags: Option<&Vec<String>>,
) -> Result<(), AppError> {
    if let Some(title) = title {
        validate::required_text("title", title, MAX_TITLE_LENGTH)?;
    }
    validate::optional_text("excerpt", excerpt, MAX_EXCERPT_LENGTH)?;
    validate::non_negative("time_read", time_read)?;

    for tag in tags.into_iter().flatten() {
        validate::required_text("tags", tag, MAX_TAG_NAME_LENGTH)?;
    }

    Ok(())
}

async fn resolve_category<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    slug: Option<&str>,
) -> Result<Option<i32>, AppError> {
    let Some(slug) = slug else {
        return Ok(None);
    };

    let category = CategoryRepository::new(db)
        .find_by_slug(user_id, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

    Ok(Some(category.id))
}

async fn resolve_author<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    slug: Option<&str>,
) -> Result<Option<i32>, AppError> {
    let Some(slug) = slug else {
        return Ok(None);
    };

    let author = AuthorRepository::new(db)
        .find_by_slug(user_id, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author '{}' not found", slug)))?;

    Ok(Some(author.id))
}

/// Replaces the post's tags with `names`, creating the user's missing tags.
async fn attach_tags<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    post_id: i32,
    names: &[String],
) -> Result<(), AppError> {
    let repo = TagRepository::new(db);
    let mut tag_ids = Vec::with_capacity(names.len());

    for name in names {
        let tag = match repo.find_by_name(user_id, name).await? {
            Some(tag) => tag,
            None => repo
                .create(user_id, name.clone())
                .await
                .map_err(|e| translate_violation(e, &[&UNIQUE_NAME]))?,
        };

        if !tag_ids.contains(&tag.id) {
            tag_ids.push(tag.id);
        }
    }

    repo.set_tags_for_post(post_id, &tag_ids).await?;

    Ok(())
}

async fn load_detail<C: ConnectionTrait>(db: &C, post: Post) -> Result<PostDetail, AppError> {
    let sections = SectionRepository::new(db).get_by_post(post.id).await?;
    let tags = TagRepository::new(db).names_for_post(post.id).await?;

    Ok(PostDetail {
        post,
        sections,
        tags,
    })
}
