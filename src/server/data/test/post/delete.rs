use super::*;

/// Tests that deleting a post cascades to its sections, comments and tag links.
///
/// Expected: dependent rows gone, the tag itself kept
#[tokio::test]
async fn deletes_post_with_dependents() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let section = factory::create_section(db, &post, Some(1)).await?;
    let comment = factory::create_comment(db, &post).await?;
    let tag = factory::create_tag(db, user.id).await?;
    factory::link_tag(db, post.id, tag.id).await?;

    PostRepository::new(db).delete(post.id).await?;

    assert!(entity::prelude::Section::find_by_id(section.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::PostTag::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Tag::find_by_id(tag.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
