use super::*;

/// Tests a slug already used in the same scope.
///
/// Expected: Err(DuplicateSlug) naming the owner scope
#[tokio::test]
async fn rejects_duplicate_in_same_scope() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .build()
        .await?;

    let result = category::UNIQUE_SLUG
        .ensure_unique(db, user.id, "shoes", None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateSlug {
            entity: "category",
            scope: Scope::Owner,
        }))
    ));

    Ok(())
}

/// Tests the same slug in a different owner's scope.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_value_in_other_scope() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, other.id)
        .slug("shoes")
        .order(Some(1))
        .build()
        .await?;

    category::UNIQUE_SLUG
        .ensure_unique(db, owner.id, "shoes", None)
        .await?;
    category::UNIQUE_ORDER
        .ensure_unique(db, owner.id, 1, None)
        .await?;

    Ok(())
}

/// Tests re-checking a record's own current value during an update.
///
/// Expected: Ok when the record itself is excluded
#[tokio::test]
async fn excludes_record_being_updated() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .order(Some(3))
        .build()
        .await?;

    category::UNIQUE_SLUG
        .ensure_unique(db, user.id, "shoes", Some(existing.id))
        .await?;
    category::UNIQUE_ORDER
        .ensure_unique(db, user.id, 3, Some(existing.id))
        .await?;

    Ok(())
}

/// Tests a duplicate order among the sections of one post.
///
/// Expected: Err(DuplicateOrder) naming the post scope
#[tokio::test]
async fn rejects_duplicate_order_in_post() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    factory::create_section(db, &post, Some(2)).await?;

    let result = section::UNIQUE_ORDER
        .ensure_unique(db, post.id, 2, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateOrder {
            entity: "section",
            scope: Scope::Post,
        }))
    ));

    Ok(())
}
