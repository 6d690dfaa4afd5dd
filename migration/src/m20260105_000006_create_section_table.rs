use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000005_create_post_table::Post};
use crate::index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(pk_auto(Section::Id))
                    .col(integer(Section::UserId))
                    .col(integer(Section::PostId))
                    .col(integer_null(Section::Order))
                    .col(string_len_null(Section::SubTitle, 255))
                    .col(text(Section::Content))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_user_id")
                            .from(Section::Table, Section::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_post_id")
                            .from(Section::Table, Section::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager.create_index(index::section_post_order()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(index::SECTION_POST_ORDER)
                    .table(Section::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Section::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Section {
    Table,
    Id,
    UserId,
    PostId,
    Order,
    SubTitle,
    Content,
}
