use super::*;

/// Tests listing in display order, restricted to the owner.
///
/// Expected: categories sorted by order, other owners excluded
#[tokio::test]
async fn returns_owner_categories_in_order() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .name("Travel")
        .order(Some(5))
        .build()
        .await?;
    factory::category::CategoryFactory::new(db, user.id)
        .name("Shoes")
        .order(Some(1))
        .build()
        .await?;
    factory::category::CategoryFactory::new(db, other.id)
        .name("Food")
        .order(Some(2))
        .build()
        .await?;

    let categories = CategoryRepository::new(db).get_all(user.id).await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Shoes", "Travel"]);

    Ok(())
}

/// Tests lookup by slug across owners.
///
/// Expected: None for another owner's slug
#[tokio::test]
async fn find_by_slug_is_owner_scoped() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, other.id)
        .slug("shoes")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.find_by_slug(user.id, "shoes").await?.is_none());
    assert!(repo.find_by_slug(other.id, "shoes").await?.is_some());

    Ok(())
}
