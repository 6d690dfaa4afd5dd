use super::*;

/// Tests that a write rejected by the (owner, order) index maps to the order rule.
///
/// The application check is skipped on purpose, as happens when two writers race.
///
/// Expected: Err(DuplicateOrder)
#[tokio::test]
async fn maps_unique_index_violation_to_rule() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .order(Some(5))
        .build()
        .await?;

    let err = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            user_id: user.id,
            name: "Travel".to_string(),
            slug: Some("travel".to_string()),
            order: Some(5),
        })
        .await
        .unwrap_err();

    let translated = translate_violation(err, &[&category::UNIQUE_SLUG, &category::UNIQUE_ORDER]);

    assert!(matches!(
        translated,
        AppError::ValidationErr(ValidationError::DuplicateOrder {
            entity: "category",
            ..
        })
    ));

    Ok(())
}

/// Tests that the slug index is told apart from the order index.
///
/// Expected: Err(DuplicateSlug)
#[tokio::test]
async fn distinguishes_slug_violation() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .order(Some(1))
        .build()
        .await?;

    let err = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            user_id: user.id,
            name: "Shoes".to_string(),
            slug: Some("shoes".to_string()),
            order: Some(2),
        })
        .await
        .unwrap_err();

    let translated = translate_violation(err, &[&category::UNIQUE_SLUG, &category::UNIQUE_ORDER]);

    assert!(matches!(
        translated,
        AppError::ValidationErr(ValidationError::DuplicateSlug { .. })
    ));

    Ok(())
}

/// Tests that errors unrelated to the given rules pass through unchanged.
///
/// Expected: AppError::DbErr
#[tokio::test]
async fn passes_through_other_errors() -> Result<(), DbErr> {
    let err = DbErr::Custom("connection reset".to_string());

    let translated = translate_violation(err, &[&category::UNIQUE_SLUG]);

    assert!(matches!(translated, AppError::DbErr(_)));

    Ok(())
}
