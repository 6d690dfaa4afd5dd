use super::*;

/// Tests creating a post that references a category, an author and tags.
///
/// Expected: derived slug, both references resolved, tags created and sorted by name
#[tokio::test]
async fn creates_post_with_references_and_tags() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, owner.id)
        .slug("travel")
        .build()
        .await?;
    let author = factory::author::AuthorFactory::new(db, owner.id)
        .slug("jane")
        .build()
        .await?;
    factory::tag::create_tag_with_name(db, owner.id, "rust").await?;

    let detail = PostService::new(db)
        .create(CreatePostParams::from_dto(
            owner.id,
            CreatePostDto {
                title: "Hello, World!".to_string(),
                slug: None,
                category: Some("travel".to_string()),
                author: Some("jane".to_string()),
                excerpt: None,
                time_read: Some(3),
                tags: Some(vec![
                    "rust".to_string(),
                    "axum".to_string(),
                    "rust".to_string(),
                ]),
            },
        ))
        .await?;

    assert_eq!(detail.post.slug, "hello-world");
    assert_eq!(detail.post.category.map(|c| c.id), Some(category.id));
    assert_eq!(detail.post.author.map(|a| a.id), Some(author.id));
    assert!(detail.sections.is_empty());
    assert_eq!(detail.tags, vec!["axum".to_string(), "rust".to_string()]);

    // The existing tag was reused rather than duplicated
    let tags = TagService::new(db).get_all(owner.id).await?;
    assert_eq!(tags.len(), 2);

    Ok(())
}

/// Tests referencing another owner's category.
///
/// Expected: NotFound and no post written
#[tokio::test]
async fn rejects_foreign_category() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, other.id)
        .slug("travel")
        .build()
        .await?;

    let mut params = new_post(owner.id, "Hello");
    params.category = Some("travel".to_string());

    let service = PostService::new(db);
    let result = service.create(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_paginated(owner.id, 0, 10).await?.total, 0);

    Ok(())
}

/// Tests duplicate post slugs within and across owners.
///
/// Expected: DuplicateSlug for the same owner, success for another owner
#[tokio::test]
async fn slug_is_unique_per_owner() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let service = PostService::new(db);
    service.create(new_post(owner.id, "Hello")).await?;

    let duplicate = service.create(new_post(owner.id, "Hello")).await;
    assert!(matches!(
        duplicate,
        Err(AppError::ValidationErr(ValidationError::DuplicateSlug {
            entity: "post",
            ..
        }))
    ));

    service.create(new_post(other.id, "Hello")).await?;

    Ok(())
}

/// Tests the paginated listing counts.
///
/// Expected: total and total_pages reflect all of the owner's posts
#[tokio::test]
async fn paginates_posts() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_post(db, owner.id).await?;
    }

    let page = PostService::new(db).get_paginated(owner.id, 2, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.posts.len(), 1);

    Ok(())
}

/// Tests page numbers whose offset does not fit the database.
///
/// Expected: BadRequest for an overflowing page, an empty page just below the limit
#[tokio::test]
async fn rejects_out_of_range_page() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    factory::create_post(db, owner.id).await?;

    let service = PostService::new(db);

    let overflow = service.get_paginated(owner.id, u64::MAX, 10).await;
    assert!(matches!(overflow, Err(AppError::BadRequest(_))));

    let past_limit = service.get_paginated(owner.id, i64::MAX as u64, 2).await;
    assert!(matches!(past_limit, Err(AppError::BadRequest(_))));

    let far = service.get_paginated(owner.id, 1_000_000, 10).await?;
    assert_eq!(far.total, 1);
    assert!(far.posts.is_empty());

    Ok(())
}

/// Tests a partial update that replaces the tags and changes the slug.
///
/// Expected: new slug, only the new tags, detail retrievable under the new slug
#[tokio::test]
async fn updates_slug_and_tags() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let service = PostService::new(db);
    let mut params = new_post(owner.id, "Hello");
    params.tags = vec!["old".to_string()];
    service.create(params).await?;

    let updated = service
        .update(UpdatePostParams::from_dto(
            owner.id,
            "hello".to_string(),
            UpdatePostDto {
                slug: Some("hello-again".to_string()),
                tags: Some(vec!["new".to_string()]),
                ..Default::default()
            },
        ))
        .await?
        .unwrap();

    assert_eq!(updated.post.slug, "hello-again");
    assert_eq!(updated.tags, vec!["new".to_string()]);
    assert!(service.get_by_slug(owner.id, "hello").await?.is_none());
    assert!(service.get_by_slug(owner.id, "hello-again").await?.is_some());

    Ok(())
}

/// Tests that a negative reading time is rejected.
///
/// Expected: Negative { field: "time_read" }
#[tokio::test]
async fn rejects_negative_time_read() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let mut params = new_post(owner.id, "Hello");
    params.time_read = Some(-1);

    let result = PostService::new(db).create(params).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Negative {
            field: "time_read"
        }))
    ));

    Ok(())
}

/// Tests deleting a post.
///
/// Expected: the deleted post is returned once, then None
#[tokio::test]
async fn deletes_post() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let service = PostService::new(db);
    service.create(new_post(owner.id, "Hello")).await?;

    let deleted = service.delete(owner.id, "hello").await?;
    assert_eq!(deleted.map(|p| p.slug), Some("hello".to_string()));
    assert!(service.delete(owner.id, "hello").await?.is_none());

    Ok(())
}
