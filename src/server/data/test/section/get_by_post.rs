use super::*;

/// Tests listing in (order, id) order.
///
/// Expected: sections sorted by order value regardless of insertion order
#[tokio::test]
async fn returns_sections_in_display_order() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    let third = factory::create_section(db, &post, Some(3)).await?;
    let first = factory::create_section(db, &post, Some(1)).await?;
    let second = factory::create_section(db, &post, Some(2)).await?;

    let sections = SectionRepository::new(db).get_by_post(post.id).await?;

    let ids: Vec<i32> = sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that lookup by ID is restricted to the given post.
///
/// Expected: None when the section belongs to another post
#[tokio::test]
async fn find_by_id_is_post_scoped() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let other_post = factory::create_post(db, user.id).await?;
    let section = factory::create_section(db, &post, Some(1)).await?;

    let repo = SectionRepository::new(db);

    assert!(repo.find_by_id(post.id, section.id).await?.is_some());
    assert!(repo.find_by_id(other_post.id, section.id).await?.is_none());

    Ok(())
}
