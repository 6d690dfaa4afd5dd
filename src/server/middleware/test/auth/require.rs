use super::*;

/// Tests a request carrying the token of an active user.
///
/// Expected: Ok with that user
#[tokio::test]
async fn returns_user_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_authenticated_user(db).await?;
    let headers = headers_with(&format!("Token {}", token.token));

    let authenticated = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a well-formed header with a token that was never issued.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn fails_for_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_authenticated_user(db).await?;
    let headers = headers_with("Token does-not-exist");

    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests the token of a deactivated account.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn fails_for_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let token = factory::create_api_token(db, user.id).await?;
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
