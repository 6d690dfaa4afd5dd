use super::*;

/// Tests inserting a category with resolved slug and order.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let category = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            user_id: user.id,
            name: "Shoes".to_string(),
            slug: Some("shoes".to_string()),
            order: Some(1),
        })
        .await?;

    assert_eq!(category.name, "Shoes");
    assert_eq!(category.slug, "shoes");
    assert_eq!(category.order, Some(1));

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_id, user.id);

    Ok(())
}

/// Tests that the (owner, slug) index rejects a duplicate slug.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn index_rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .slug("shoes")
        .build()
        .await?;

    let result = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            user_id: user.id,
            name: "Shoes".to_string(),
            slug: Some("shoes".to_string()),
            order: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
