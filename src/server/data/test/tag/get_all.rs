use super::*;

/// Tests listing tags with the slugs of their posts.
///
/// Expected: tags sorted by name, each with its own posts, other owners excluded
#[tokio::test]
async fn returns_tags_with_post_slugs() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, user.id)
        .slug("hello")
        .build()
        .await?;
    let rust = factory::tag::create_tag_with_name(db, user.id, "rust").await?;
    factory::tag::create_tag_with_name(db, user.id, "go").await?;
    factory::tag::create_tag_with_name(db, other.id, "zig").await?;
    factory::link_tag(db, post.id, rust.id).await?;

    let tags = TagRepository::new(db).get_all(user.id).await?;

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "go");
    assert!(tags[0].posts.is_empty());
    assert_eq!(tags[1].name, "rust");
    assert_eq!(tags[1].posts, vec!["hello".to_string()]);

    Ok(())
}

/// Tests lookup of another owner's tag.
///
/// Expected: None
#[tokio::test]
async fn get_by_id_is_owner_scoped() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let tag = factory::create_tag(db, other.id).await?;

    let repo = TagRepository::new(db);

    assert!(repo.get_by_id(user.id, tag.id).await?.is_none());
    assert!(repo.get_by_id(other.id, tag.id).await?.is_some());

    Ok(())
}

/// Tests that the (owner, name) index rejects a duplicate tag name.
///
/// Expected: Err(DbErr) for the same owner, Ok for another owner
#[tokio::test]
async fn index_rejects_duplicate_name() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::tag::create_tag_with_name(db, user.id, "rust").await?;

    let repo = TagRepository::new(db);

    assert!(repo.create(user.id, "rust".to_string()).await.is_err());
    assert!(repo.create(other.id, "rust".to_string()).await.is_ok());

    Ok(())
}
