//! Scoped ordering and uniqueness helpers.
//!
//! Categories keep a per-owner display order and sections keep a per-post one. Both
//! fill a missing order value with the next free position in their partition, and slugs,
//! orders and tag names must stay unique within theirs. The bindings below tie those rules
//! to typed SeaORM columns so they are checked once at startup instead of on every request.
//!
//! The read-then-write sequence is not serialized against concurrent writers. Each pair
//! is also backed by a composite unique index (see `migration::index`), and
//! [`translate_violation`] turns a violation of such an index into the same validation
//! error the application-level check produces.

use std::fmt;

use sea_orm::{
    ColumnTrait, ColumnType, ConnectionTrait, DbErr, EntityName, EntityTrait, IdenStatic,
    Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    Value,
};

use crate::server::error::{config::ConfigError, validation::ValidationError, AppError};

/// Partition a scoped rule applies within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// All records of one owning user.
    Owner,
    /// All sections of one post.
    Post,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => f.write_str("user"),
            Self::Post => f.write_str("post"),
        }
    }
}

/// Kind of value a `ScopedField` protects, decides the reported error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Slug,
    Order,
    Name,
}

/// Next order value for a partition whose current maximum is `current_max`.
///
/// An empty partition starts at 1. Gaps left by deletions are never reused.
pub fn next_order_value(current_max: Option<i32>) -> i32 {
    current_max.map_or(1, |max| max.saturating_add(1))
}

/// Auto-assigned order column bound to the column that partitions it.
pub struct OrderField<E: EntityTrait> {
    /// Integer column holding the order value.
    pub column: E::Column,
    /// Foreign key column defining the partition.
    pub scope: E::Column,
}

impl<E: EntityTrait> OrderField<E> {
    /// Validates the binding against the entity definition.
    ///
    /// # Returns
    /// - `Ok(())` - Binding is usable
    /// - `Err(ConfigError::InvalidScopedField)` - Order column is not an integer, or the
    ///   scope column is unusable (see [`ScopedField::check`])
    pub fn check(&self) -> Result<(), ConfigError> {
        check_scope::<E>(self.column, self.scope)?;

        if !is_integer(self.column) {
            return Err(invalid::<E>(self.column, "order column must be an integer"));
        }

        Ok(())
    }

    /// Highest order value currently stored in the partition.
    ///
    /// Uses a descending sort over the order column rather than a row count, so deleted
    /// rows never cause a value to be handed out twice.
    pub async fn max_in_scope<C: ConnectionTrait>(
        &self,
        db: &C,
        scope_value: i32,
    ) -> Result<Option<i32>, DbErr> {
        E::find()
            .select_only()
            .column(self.column)
            .filter(self.scope.eq(scope_value))
            .filter(self.column.is_not_null())
            .order_by_desc(self.column)
            .limit(1)
            .into_tuple::<i32>()
            .one(db)
            .await
    }

    /// Fills `order` with the next value of the partition if the caller left it empty.
    ///
    /// An explicit value is left untouched; it is validated separately.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction the write will use
    /// - `order` - Order value of the record about to be inserted
    /// - `scope_value` - Value of the scope column for that record
    ///
    /// # Returns
    /// - `Ok(i32)` - The order value the record will carry
    /// - `Err(DbErr)` - Database error while reading the current maximum
    pub async fn assign<C: ConnectionTrait>(
        &self,
        db: &C,
        order: &mut Option<i32>,
        scope_value: i32,
    ) -> Result<i32, DbErr> {
        if let Some(value) = *order {
            return Ok(value);
        }

        let value = next_order_value(self.max_in_scope(db, scope_value).await?);
        *order = Some(value);

        Ok(value)
    }
}

/// Column whose values must be unique within a scope.
pub struct ScopedField<E: EntityTrait> {
    /// Constrained column.
    pub column: E::Column,
    /// Foreign key column defining the partition.
    pub scope: E::Column,
    /// Primary key column, used to skip the record being updated.
    pub id: E::Column,
    pub kind: FieldKind,
    pub scope_kind: Scope,
    /// Entity name used in error messages.
    pub entity: &'static str,
    /// Name of the composite unique index backing this rule.
    pub index: &'static str,
}

impl<E: EntityTrait> ScopedField<E> {
    /// Validates the binding against the entity definition.
    ///
    /// Rejects bindings where the scope column is the constrained column or the primary
    /// key, where the scope column is nullable or not an integer, and where `id` is not
    /// the primary key.
    pub fn check(&self) -> Result<(), ConfigError> {
        check_scope::<E>(self.column, self.scope)?;

        if !is_primary_key::<E>(self.id) {
            return Err(invalid::<E>(self.id, "id column must be the primary key"));
        }

        if self.kind == FieldKind::Order && !is_integer(self.column) {
            return Err(invalid::<E>(self.column, "order column must be an integer"));
        }

        Ok(())
    }

    /// Whether another record in the partition already holds `value`.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction
    /// - `scope_value` - Value of the scope column
    /// - `value` - Candidate value of the constrained column
    /// - `exclude_id` - Primary key of the record being updated, if any
    pub async fn is_taken<C, V>(
        &self,
        db: &C,
        scope_value: i32,
        value: V,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
        V: Into<Value>,
    {
        let mut query = E::find()
            .filter(self.scope.eq(scope_value))
            .filter(self.column.eq(value));

        if let Some(id) = exclude_id {
            query = query.filter(self.id.ne(id));
        }

        Ok(query
            .select_only()
            .column(self.id)
            .into_tuple::<i32>()
            .one(db)
            .await?
            .is_some())
    }

    /// Rejects `value` if another record in the partition already holds it.
    ///
    /// # Returns
    /// - `Ok(())` - Value is free in the partition
    /// - `Err(AppError::ValidationErr)` - Duplicate slug, order or name for this scope
    /// - `Err(AppError::DbErr)` - Database error during the lookup
    pub async fn ensure_unique<C, V>(
        &self,
        db: &C,
        scope_value: i32,
        value: V,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError>
    where
        C: ConnectionTrait,
        V: Into<Value>,
    {
        if self.is_taken(db, scope_value, value, exclude_id).await? {
            return Err(self.violation().into());
        }

        Ok(())
    }

    /// Validation error reported when this rule is violated.
    pub fn violation(&self) -> ValidationError {
        let entity = self.entity;
        let scope = self.scope_kind;

        match self.kind {
            FieldKind::Slug => ValidationError::DuplicateSlug { entity, scope },
            FieldKind::Order => ValidationError::DuplicateOrder { entity, scope },
            FieldKind::Name => ValidationError::DuplicateName { entity, scope },
        }
    }

    /// Whether `err` is a unique constraint failure of this rule's index.
    ///
    /// SQLite reports the failing columns as `table.column`, other backends report the
    /// index name; both forms are accepted.
    pub fn matches(&self, err: &DbErr) -> bool {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                let qualified = format!("{}.{}", E::default().table_name(), self.column.as_str());

                message.contains(self.index) || message.contains(&qualified)
            }
            _ => false,
        }
    }
}

/// Maps a failed write onto the scoped rule it violated.
///
/// Unique constraint failures of one of `fields` become that rule's validation error;
/// anything else is passed through as a database error.
pub fn translate_violation<E: EntityTrait>(err: DbErr, fields: &[&ScopedField<E>]) -> AppError {
    match fields.iter().find(|field| field.matches(&err)) {
        Some(field) => {
            tracing::debug!("Unique index {} rejected write: {}", field.index, err);
            field.violation().into()
        }
        None => err.into(),
    }
}

fn check_scope<E: EntityTrait>(column: E::Column, scope: E::Column) -> Result<(), ConfigError> {
    if column.as_str() == scope.as_str() {
        return Err(invalid::<E>(
            column,
            "scope column must differ from the constrained column",
        ));
    }

    if is_primary_key::<E>(column) {
        return Err(invalid::<E>(column, "primary key cannot be a scoped field"));
    }

    if is_primary_key::<E>(scope) {
        return Err(invalid::<E>(
            column,
            &format!("scope `{}` is the primary key", scope.as_str()),
        ));
    }

    let scope_def = scope.def();

    if scope_def.is_null() {
        return Err(invalid::<E>(
            column,
            &format!("scope `{}` is nullable", scope.as_str()),
        ));
    }

    if !matches!(scope_def.get_column_type(), ColumnType::Integer) {
        return Err(invalid::<E>(
            column,
            &format!("scope `{}` is not an integer foreign key", scope.as_str()),
        ));
    }

    Ok(())
}

fn is_primary_key<E: EntityTrait>(column: E::Column) -> bool {
    E::PrimaryKey::iter().any(|key| key.into_column().as_str() == column.as_str())
}

fn is_integer<C: ColumnTrait>(column: C) -> bool {
    matches!(column.def().get_column_type(), ColumnType::Integer)
}

fn invalid<E: EntityTrait>(column: E::Column, reason: &str) -> ConfigError {
    ConfigError::InvalidScopedField {
        table: E::default().table_name().to_string(),
        column: column.as_str().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{category, post, section};

    #[test]
    fn first_value_in_empty_scope_is_one() {
        assert_eq!(next_order_value(None), 1);
    }

    #[test]
    fn next_value_follows_current_max() {
        assert_eq!(next_order_value(Some(1)), 2);
        assert_eq!(next_order_value(Some(41)), 42);
    }

    #[test]
    fn next_value_saturates_at_i32_max() {
        assert_eq!(next_order_value(Some(i32::MAX)), i32::MAX);
    }

    #[test]
    fn accepts_well_formed_bindings() {
        let order = OrderField::<section::Entity> {
            column: section::Column::Order,
            scope: section::Column::PostId,
        };

        assert!(order.check().is_ok());
    }

    #[test]
    fn rejects_scope_equal_to_constrained_column() {
        let field = ScopedField::<category::Entity> {
            column: category::Column::Slug,
            scope: category::Column::Slug,
            id: category::Column::Id,
            kind: FieldKind::Slug,
            scope_kind: Scope::Owner,
            entity: "category",
            index: "idx_category_user_id_slug",
        };

        assert!(matches!(
            field.check(),
            Err(ConfigError::InvalidScopedField { .. })
        ));
    }

    #[test]
    fn rejects_primary_key_as_scope() {
        let order = OrderField::<category::Entity> {
            column: category::Column::Order,
            scope: category::Column::Id,
        };

        assert!(order.check().is_err());
    }

    #[test]
    fn rejects_non_integer_scope() {
        let order = OrderField::<category::Entity> {
            column: category::Column::Order,
            scope: category::Column::Name,
        };

        assert!(order.check().is_err());
    }

    #[test]
    fn rejects_nullable_scope() {
        let field = ScopedField::<post::Entity> {
            column: post::Column::Slug,
            scope: post::Column::CategoryId,
            id: post::Column::Id,
            kind: FieldKind::Slug,
            scope_kind: Scope::Owner,
            entity: "post",
            index: "idx_post_user_id_slug",
        };

        assert!(field.check().is_err());
    }

    #[test]
    fn rejects_non_integer_order_column() {
        let order = OrderField::<category::Entity> {
            column: category::Column::Name,
            scope: category::Column::UserId,
        };

        let err = order.check().unwrap_err();

        assert!(err.to_string().contains("category.name"));
    }

    #[test]
    fn rejects_id_that_is_not_the_primary_key() {
        let field = ScopedField::<category::Entity> {
            column: category::Column::Slug,
            scope: category::Column::UserId,
            id: category::Column::Order,
            kind: FieldKind::Slug,
            scope_kind: Scope::Owner,
            entity: "category",
            index: "idx_category_user_id_slug",
        };

        assert!(field.check().is_err());
    }
}
