use super::*;

/// Tests resolving an issued token of an active user.
///
/// Expected: Some(user)
#[tokio::test]
async fn resolves_active_user() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_authenticated_user(db).await?;

    let found = UserRepository::new(db).find_by_token(&token.token).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests tokens that must not authenticate.
///
/// Expected: None for unknown tokens and for tokens of inactive users
#[tokio::test]
async fn ignores_unknown_and_inactive() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let inactive = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let token = factory::create_api_token(db, inactive.id).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_token("missing").await?.is_none());
    assert!(repo.find_by_token(&token.token).await?.is_none());

    Ok(())
}
