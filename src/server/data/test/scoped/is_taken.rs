use super::*;

/// Tests the lookup across slug, order and name bindings of different entities.
///
/// Expected: true only for a value held by another record in the same partition
#[tokio::test]
async fn reports_values_held_in_partition() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let category = factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .order(Some(3))
        .build()
        .await?;
    let section = factory::create_section(db, &post, Some(2)).await?;
    factory::tag::create_tag_with_name(db, user.id, "rust").await?;

    assert!(category::UNIQUE_SLUG.is_taken(db, user.id, "shoes", None).await?);
    assert!(!category::UNIQUE_SLUG.is_taken(db, user.id, "boots", None).await?);
    assert!(category::UNIQUE_ORDER.is_taken(db, user.id, 3, None).await?);
    assert!(
        !category::UNIQUE_ORDER
            .is_taken(db, user.id, 3, Some(category.id))
            .await?
    );

    assert!(section::UNIQUE_ORDER.is_taken(db, post.id, 2, None).await?);
    assert!(
        !section::UNIQUE_ORDER
            .is_taken(db, post.id, 2, Some(section.id))
            .await?
    );

    assert!(tag::UNIQUE_NAME.is_taken(db, user.id, "rust", None).await?);
    assert!(!tag::UNIQUE_NAME.is_taken(db, user.id + 1, "rust", None).await?);

    Ok(())
}
