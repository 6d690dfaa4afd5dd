use super::*;

/// Tests inserting a section with an assigned order.
///
/// Expected: Ok with the section attached to the post
#[tokio::test]
async fn creates_section_in_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;

    let section = SectionRepository::new(db)
        .create(
            post.id,
            CreateSectionParams {
                user_id: user.id,
                post_slug: post.slug.clone().unwrap(),
                order: Some(1),
                sub_title: Some("First".to_string()),
                content: "Lorem ipsum".to_string(),
            },
        )
        .await?;

    assert_eq!(section.post_id, post.id);
    assert_eq!(section.order, Some(1));
    assert_eq!(section.sub_title.as_deref(), Some("First"));

    Ok(())
}

/// Tests that the (post, order) index rejects a duplicate order in the same post.
///
/// Expected: Err(DbErr) for the same post, Ok for another post
#[tokio::test]
async fn index_rejects_duplicate_order_per_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let other_post = factory::create_post(db, user.id).await?;
    factory::create_section(db, &post, Some(1)).await?;

    let params = |post: &entity::post::Model| CreateSectionParams {
        user_id: user.id,
        post_slug: post.slug.clone().unwrap(),
        order: Some(1),
        sub_title: None,
        content: "Body".to_string(),
    };

    let repo = SectionRepository::new(db);

    assert!(repo.create(post.id, params(&post)).await.is_err());
    assert!(repo.create(other_post.id, params(&other_post)).await.is_ok());

    Ok(())
}
