pub use sea_orm_migration::prelude::*;

pub mod index;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_api_token_table;
mod m20260105_000003_create_category_table;
mod m20260105_000004_create_author_table;
mod m20260105_000005_create_post_table;
mod m20260105_000006_create_section_table;
mod m20260105_000007_create_tag_table;
mod m20260105_000008_create_post_tag_table;
mod m20260105_000009_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_api_token_table::Migration),
            Box::new(m20260105_000003_create_category_table::Migration),
            Box::new(m20260105_000004_create_author_table::Migration),
            Box::new(m20260105_000005_create_post_table::Migration),
            Box::new(m20260105_000006_create_section_table::Migration),
            Box::new(m20260105_000007_create_tag_table::Migration),
            Box::new(m20260105_000008_create_post_tag_table::Migration),
            Box::new(m20260105_000009_create_comment_table::Migration),
        ]
    }
}
