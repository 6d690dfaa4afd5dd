//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a post owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, post))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;

    Ok((user, post))
}

/// Creates a user together with an API token for authenticated requests.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, token))` - The user and the token row referencing it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_authenticated_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::api_token::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let token = crate::factory::user::create_api_token(db, user.id).await?;

    Ok((user, token))
}
