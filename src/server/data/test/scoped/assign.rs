use super::*;

/// Tests assignment in a scope without any records.
///
/// Expected: Ok(1) and the order slot is filled
#[tokio::test]
async fn first_record_in_scope_gets_one() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut order = None;
    let value = category::ORDER.assign(db, &mut order, user.id).await?;

    assert_eq!(value, 1);
    assert_eq!(order, Some(1));

    Ok(())
}

/// Tests that consecutive assignments keep increasing.
///
/// Expected: 1, 2, 3 for three inserts without explicit order
#[tokio::test]
async fn consecutive_records_get_increasing_values() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let mut assigned = Vec::new();
    for _ in 0..3 {
        let mut order = None;
        let value = category::ORDER.assign(db, &mut order, user.id).await?;
        factory::category::CategoryFactory::new(db, user.id)
            .order(order)
            .build()
            .await?;
        assigned.push(value);
    }

    assert_eq!(assigned, vec![1, 2, 3]);

    Ok(())
}

/// Tests that gaps below the maximum are not reused and the maximum drives assignment.
///
/// Expected: max_remaining + 1 after the current maximum is deleted
#[tokio::test]
async fn follows_maximum_after_deletion() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .order(Some(2))
        .build()
        .await?;
    let highest = factory::category::CategoryFactory::new(db, user.id)
        .order(Some(7))
        .build()
        .await?;

    entity::prelude::Category::delete_by_id(highest.id)
        .exec(db)
        .await?;

    let mut order = None;
    let value = category::ORDER.assign(db, &mut order, user.id).await?;

    assert_eq!(value, 3);

    Ok(())
}

/// Tests that another owner's records do not influence assignment.
///
/// Expected: Ok(1) for a new owner even though another owner has order 9
#[tokio::test]
async fn scopes_are_independent() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, other.id)
        .order(Some(9))
        .build()
        .await?;

    let mut order = None;
    let value = category::ORDER.assign(db, &mut order, owner.id).await?;

    assert_eq!(value, 1);

    Ok(())
}

/// Tests that records still waiting for an order value are ignored.
///
/// Expected: Ok(5) when the scope holds order 4 and a row with no order
#[tokio::test]
async fn ignores_records_without_order() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .order(None)
        .build()
        .await?;
    factory::category::CategoryFactory::new(db, user.id)
        .order(Some(4))
        .build()
        .await?;

    let mut order = None;
    let value = category::ORDER.assign(db, &mut order, user.id).await?;

    assert_eq!(value, 5);

    Ok(())
}

/// Tests that an explicit order value is left untouched.
///
/// Expected: Ok(42) without consulting the stored maximum
#[tokio::test]
async fn keeps_explicit_value() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .order(Some(3))
        .build()
        .await?;

    let mut order = Some(42);
    let value = category::ORDER.assign(db, &mut order, user.id).await?;

    assert_eq!(value, 42);
    assert_eq!(order, Some(42));

    Ok(())
}

/// Tests assignment scoped to a parent post rather than an owner.
///
/// Expected: sections of another post do not influence the value
#[tokio::test]
async fn post_scope_uses_parent_post() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_owner(db).await?;
    let other_post = factory::create_post(db, user.id).await?;
    factory::create_section(db, &post, Some(1)).await?;
    factory::create_section(db, &post, Some(2)).await?;
    factory::create_section(db, &other_post, Some(10)).await?;

    let mut order = None;
    let value = section::ORDER.assign(db, &mut order, post.id).await?;

    assert_eq!(value, 3);

    Ok(())
}
