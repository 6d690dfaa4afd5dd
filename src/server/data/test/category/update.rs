use super::*;

fn params(user_id: i32) -> UpdateCategoryParams {
    UpdateCategoryParams {
        user_id,
        slug: String::new(),
        name: None,
        new_slug: None,
        order: None,
    }
}

/// Tests a partial update touching only the order.
///
/// Expected: order changed, name and slug kept
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::category::CategoryFactory::new(db, user.id)
        .name("Shoes")
        .slug("shoes")
        .order(Some(1))
        .build()
        .await?;

    let updated = CategoryRepository::new(db)
        .update(
            existing.id,
            UpdateCategoryParams {
                order: Some(4),
                ..params(user.id)
            },
        )
        .await?;

    assert_eq!(updated.name, "Shoes");
    assert_eq!(updated.slug, "shoes");
    assert_eq!(updated.order, Some(4));

    Ok(())
}

/// Tests an update without any field set.
///
/// Expected: Ok with the stored category unchanged
#[tokio::test]
async fn empty_update_returns_current_state() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::category::CategoryFactory::new(db, user.id)
        .name("Shoes")
        .build()
        .await?;

    let updated = CategoryRepository::new(db)
        .update(existing.id, params(user.id))
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Shoes");

    Ok(())
}

/// Tests an empty update of a category that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn empty_update_of_missing_category_fails() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CategoryRepository::new(db)
        .update(999, params(user.id))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
