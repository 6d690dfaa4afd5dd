use super::*;

fn params(user_id: i32, title: &str, slug: &str) -> CreatePostParams {
    CreatePostParams {
        user_id,
        title: title.to_string(),
        slug: Some(slug.to_string()),
        category: None,
        author: None,
        excerpt: Some("Short intro".to_string()),
        time_read: Some(4),
        tags: Vec::new(),
    }
}

/// Tests inserting a post referencing a category and an author.
///
/// Expected: Ok with both summaries loaded
#[tokio::test]
async fn creates_post_with_relations() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db, user.id).await?;
    let author = factory::create_author(db, user.id).await?;

    let post = PostRepository::new(db)
        .create(
            &params(user.id, "Hello World", "hello-world"),
            Some(category.id),
            Some(author.id),
        )
        .await?;

    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.category.map(|c| c.id), Some(category.id));
    assert_eq!(post.author.map(|a| a.id), Some(author.id));
    assert_eq!(post.time_read, Some(4));
    assert!(post.image.is_none());

    Ok(())
}

/// Tests resolving several slugs at once within one owner.
///
/// Expected: only the owner's matching posts
#[tokio::test]
async fn find_by_slugs_is_owner_scoped() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::post::PostFactory::new(db, user.id).slug("a").build().await?;
    factory::post::PostFactory::new(db, user.id).slug("b").build().await?;
    factory::post::PostFactory::new(db, other.id).slug("c").build().await?;

    let posts = PostRepository::new(db)
        .find_by_slugs(user.id, &["a".to_string(), "b".to_string(), "c".to_string()])
        .await?;

    let slugs: Vec<Option<String>> = posts.into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec![Some("a".to_string()), Some("b".to_string())]);

    Ok(())
}

/// Tests updating fields and replacing the image path.
///
/// Expected: new title and image stored, slug kept
#[tokio::test]
async fn updates_post_and_image() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::post::PostFactory::new(db, user.id)
        .slug("hello")
        .build()
        .await?;

    let repo = PostRepository::new(db);

    let updated = repo
        .update(
            existing.id,
            UpdatePostParams {
                user_id: user.id,
                slug: "hello".to_string(),
                title: Some("Renamed".to_string()),
                new_slug: None,
                category: None,
                author: None,
                excerpt: None,
                time_read: None,
                tags: None,
            },
            None,
            None,
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "hello");

    let with_image = repo
        .set_image(existing.id, Some("uploads/post/a.png".to_string()))
        .await?;

    assert_eq!(with_image.image.as_deref(), Some("uploads/post/a.png"));

    Ok(())
}
