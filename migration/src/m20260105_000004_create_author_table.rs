use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use crate::index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_auto(Author::Id))
                    .col(integer(Author::UserId))
                    .col(string_len(Author::Name, 200))
                    .col(string_len_null(Author::Slug, 255))
                    .col(text_null(Author::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_author_user_id")
                            .from(Author::Table, Author::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager.create_index(index::author_user_slug()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(index::AUTHOR_USER_SLUG)
                    .table(Author::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    UserId,
    Name,
    Slug,
    Description,
}
