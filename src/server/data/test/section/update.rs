use super::*;

/// Tests a partial update followed by deletion.
///
/// Expected: content kept when only the order changes, row gone after delete
#[tokio::test]
async fn updates_and_deletes_section() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let section = factory::section::SectionFactory::new(db, &post)
        .order(Some(1))
        .content("Original")
        .build()
        .await?;

    let repo = SectionRepository::new(db);

    let updated = repo
        .update(
            section.id,
            UpdateSectionParams {
                user_id: user.id,
                post_slug: post.slug.clone().unwrap(),
                id: section.id,
                order: Some(7),
                sub_title: None,
                content: None,
            },
        )
        .await?;

    assert_eq!(updated.order, Some(7));
    assert_eq!(updated.content, "Original");

    repo.delete(section.id).await?;

    assert!(repo.find_by_id(post.id, section.id).await?.is_none());

    Ok(())
}
