use super::*;

/// Tests replacing the posts of a tag.
///
/// Expected: only the new posts remain linked
#[tokio::test]
async fn replaces_linked_posts() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::post::PostFactory::new(db, user.id).slug("first").build().await?;
    let second = factory::post::PostFactory::new(db, user.id).slug("second").build().await?;
    let tag = factory::create_tag(db, user.id).await?;
    factory::link_tag(db, first.id, tag.id).await?;

    let repo = TagRepository::new(db);
    repo.set_posts(tag.id, &[second.id]).await?;

    let tag = repo.get_by_id(user.id, tag.id).await?.unwrap();
    assert_eq!(tag.posts, vec!["second".to_string()]);

    Ok(())
}

/// Tests replacing the tags of a post and reading their names back.
///
/// Expected: names of the new tags sorted by name
#[tokio::test]
async fn replaces_tags_of_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let old = factory::tag::create_tag_with_name(db, user.id, "old").await?;
    let web = factory::tag::create_tag_with_name(db, user.id, "web").await?;
    let api = factory::tag::create_tag_with_name(db, user.id, "api").await?;
    factory::link_tag(db, post.id, old.id).await?;

    let repo = TagRepository::new(db);
    repo.set_tags_for_post(post.id, &[web.id, api.id]).await?;

    let names = repo.names_for_post(post.id).await?;
    assert_eq!(names, vec!["api".to_string(), "web".to_string()]);

    Ok(())
}

/// Tests renaming and deleting a tag.
///
/// Expected: new name stored, links removed with the tag
#[tokio::test]
async fn renames_and_deletes_tag() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let tag = factory::tag::create_tag_with_name(db, user.id, "rust").await?;
    factory::link_tag(db, post.id, tag.id).await?;

    let repo = TagRepository::new(db);

    let renamed = repo.rename(tag.id, "rustlang".to_string()).await?;
    assert_eq!(renamed.name, "rustlang");
    assert!(repo.find_by_name(user.id, "rustlang").await?.is_some());

    repo.delete(tag.id).await?;

    assert!(repo.names_for_post(post.id).await?.is_empty());

    Ok(())
}
