use super::*;

/// Tests listing with and without a post filter.
///
/// Expected: all owner comments oldest first, or only those of the given post
#[tokio::test]
async fn filters_by_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let other_post = factory::create_post(db, user.id).await?;
    let first = factory::comment::create_comment_with_name(db, &post, "A").await?;
    let second = factory::comment::create_comment_with_name(db, &other_post, "B").await?;

    let (_, foreign_post) = factory::helpers::create_post_with_owner(db).await?;
    factory::create_comment(db, &foreign_post).await?;

    let repo = CommentRepository::new(db);

    let all = repo.get_all(user.id, None).await?;
    assert_eq!(
        all.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let filtered = repo.get_all(user.id, Some(other_post.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, second.id);

    Ok(())
}

/// Tests lookup and deletion of a comment.
///
/// Expected: another owner cannot see it, gone after delete
#[tokio::test]
async fn find_and_delete() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    let comment = factory::create_comment(db, &post).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.find_by_id(other.id, comment.id).await?.is_none());
    assert!(repo.find_by_id(user.id, comment.id).await?.is_some());

    repo.delete(comment.id).await?;

    assert!(repo.find_by_id(user.id, comment.id).await?.is_none());

    Ok(())
}
