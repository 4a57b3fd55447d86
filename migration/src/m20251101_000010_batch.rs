use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_guild::Guild;

static IDX_BATCH_GUILD_ID: &str = "idx-batch-guild_id";
static FK_BATCH_GUILD_ID: &str = "fk-batch-guild_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batch::Table)
                    .if_not_exists()
                    .col(pk_auto(Batch::Id))
                    .col(integer(Batch::GuildId))
                    .col(integer(Batch::MemberId))
                    .col(integer_null(Batch::UserId))
                    .col(integer_null(Batch::RaidId))
                    .col(string_len_null(Batch::Name, 75))
                    .col(string(Batch::Note))
                    .col(string_len(Batch::Type, 20))
                    .col(timestamp(Batch::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BATCH_GUILD_ID)
                    .table(Batch::Table)
                    .col(Batch::GuildId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATCH_GUILD_ID)
                    .from_tbl(Batch::Table)
                    .from_col(Batch::GuildId)
                    .to_tbl(Guild::Table)
                    .to_col(Guild::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BATCH_GUILD_ID)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BATCH_GUILD_ID)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Batch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Batch {
    Table,
    Id,
    GuildId,
    MemberId,
    UserId,
    RaidId,
    Name,
    Note,
    Type,
    CreatedAt,
}
