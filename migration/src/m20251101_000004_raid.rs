use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_guild::Guild;

static IDX_RAID_GUILD_ID: &str = "idx-raid-guild_id";
static FK_RAID_GUILD_ID: &str = "fk-raid-guild_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Raid::Table)
                    .if_not_exists()
                    .col(pk_auto(Raid::Id))
                    .col(integer(Raid::GuildId))
                    .col(string(Raid::Name))
                    .col(string(Raid::Slug))
                    .col(string_null(Raid::Color))
                    .col(timestamp(Raid::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RAID_GUILD_ID)
                    .table(Raid::Table)
                    .col(Raid::GuildId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RAID_GUILD_ID)
                    .from_tbl(Raid::Table)
                    .from_col(Raid::GuildId)
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
                    .name(FK_RAID_GUILD_ID)
                    .table(Raid::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RAID_GUILD_ID)
                    .table(Raid::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Raid::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Raid {
    Table,
    Id,
    GuildId,
    Name,
    Slug,
    Color,
    CreatedAt,
}
