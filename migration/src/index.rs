//! Composite unique indexes backing the per-scope uniqueness rules.
//!
//! The application checks these pairs before every write, but two concurrent writers
//! can both pass the check. These indexes are what finally rejects the second commit,
//! so the migrations and the test schema builder both create them from here.

use sea_orm_migration::prelude::*;

use crate::{
    m20260105_000003_create_category_table::Category,
    m20260105_000004_create_author_table::Author,
    m20260105_000005_create_post_table::Post,
    m20260105_000006_create_section_table::Section,
    m20260105_000007_create_tag_table::Tag,
};

pub const CATEGORY_USER_SLUG: &str = "idx_category_user_id_slug";
pub const CATEGORY_USER_ORDER: &str = "idx_category_user_id_order";
pub const AUTHOR_USER_SLUG: &str = "idx_author_user_id_slug";
pub const POST_USER_SLUG: &str = "idx_post_user_id_slug";
pub const SECTION_POST_ORDER: &str = "idx_section_post_id_order";
pub const TAG_USER_NAME: &str = "idx_tag_user_id_name";

fn unique<T, S, C>(name: &str, table: T, scope: S, column: C) -> IndexCreateStatement
where
    T: IntoIden,
    S: IntoIden,
    C: IntoIden,
{
    Index::create()
        .name(name)
        .table(table)
        .col(scope)
        .col(column)
        .unique()
        .to_owned()
}

pub fn category_user_slug() -> IndexCreateStatement {
    unique(CATEGORY_USER_SLUG, Category::Table, Category::UserId, Category::Slug)
}

pub fn category_user_order() -> IndexCreateStatement {
    unique(CATEGORY_USER_ORDER, Category::Table, Category::UserId, Category::Order)
}

pub fn author_user_slug() -> IndexCreateStatement {
    unique(AUTHOR_USER_SLUG, Author::Table, Author::UserId, Author::Slug)
}

pub fn post_user_slug() -> IndexCreateStatement {
    unique(POST_USER_SLUG, Post::Table, Post::UserId, Post::Slug)
}

pub fn section_post_order() -> IndexCreateStatement {
    unique(SECTION_POST_ORDER, Section::Table, Section::PostId, Section::Order)
}

pub fn tag_user_name() -> IndexCreateStatement {
    unique(TAG_USER_NAME, Tag::Table, Tag::UserId, Tag::Name)
}

/// Every scoped unique index, in table creation order.
pub fn scoped_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        category_user_slug(),
        category_user_order(),
        author_user_slug(),
        post_user_slug(),
        section_post_order(),
        tag_user_name(),
    ]
}
