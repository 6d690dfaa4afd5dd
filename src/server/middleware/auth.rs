use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Schemes accepted in front of the token in the `Authorization` header.
const TOKEN_SCHEMES: &[&str] = &["Token", "Bearer"];

/// Resolves the account a request acts for from its API token.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires a valid token belonging to an active account.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated owner
    /// - `Err(AppError::AuthErr(MissingToken))` - No header, or not `Token <key>`/`Bearer <key>`
    /// - `Err(AppError::AuthErr(InvalidToken))` - Unknown token or inactive account
    pub async fn require(&self) -> Result<User, AppError> {
        let token = extract_token(self.headers).ok_or(AuthError::MissingToken)?;

        let Some(user) = UserRepository::new(self.db).find_by_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

/// Token value of an `Authorization: <scheme> <key>` header.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !TOKEN_SCHEMES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(scheme))
    {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(' ') {
        return None;
    }

    Some(token)
}
