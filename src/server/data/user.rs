//! User data repository for database operations.
//!
//! Accounts and their API tokens are issued elsewhere; this repository only resolves them.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::User;

/// Repository providing read access to users and their tokens.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the active user owning an API token.
    ///
    /// Tokens of deactivated accounts resolve to `None`, exactly like unknown tokens.
    ///
    /// # Arguments
    /// - `token` - Raw token value from the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token exists and its account is active
    /// - `Ok(None)` - Unknown token or inactive account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::ApiToken::find_by_id(token.to_string())
            .find_also_related(entity::prelude::User)
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }
}
