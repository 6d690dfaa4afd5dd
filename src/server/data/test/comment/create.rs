use super::*;

/// Tests inserting a comment and reading it back with its post slug.
///
/// Expected: Ok with post slug, both timestamps equal
#[tokio::test]
async fn creates_comment_on_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;

    let comment = CommentRepository::new(db)
        .create(
            post.id,
            CreateCommentParams {
                user_id: user.id,
                post_slug: post.slug.clone().unwrap(),
                name: Some("Jane".to_string()),
                message: "Nice post".to_string(),
                is_visible: true,
            },
        )
        .await?;

    assert_eq!(Some(comment.post), post.slug);
    assert_eq!(comment.name.as_deref(), Some("Jane"));
    assert!(comment.is_visible);
    assert_eq!(comment.date_created, comment.date_updated);

    Ok(())
}

/// Tests moving a comment to another post while hiding it.
///
/// Expected: new post slug, visibility changed, message kept
#[tokio::test]
async fn update_moves_comment() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let target = factory::post::PostFactory::new(db, user.id)
        .slug("target")
        .build()
        .await?;
    let comment = factory::create_comment(db, &post).await?;

    let updated = CommentRepository::new(db)
        .update(
            comment.id,
            Some(target.id),
            UpdateCommentParams {
                user_id: user.id,
                id: comment.id,
                post_slug: Some("target".to_string()),
                name: None,
                message: None,
                is_visible: Some(true),
            },
        )
        .await?;

    assert_eq!(updated.post, "target");
    assert!(updated.is_visible);
    assert_eq!(updated.message, comment.message);

    Ok(())
}
