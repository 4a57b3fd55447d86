use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_guild::Guild, m20251101_000007_item::Item};

static IDX_GUILD_ITEM_GUILD_ID_ITEM_ID: &str = "idx-guild_item-guild_id-item_id";
static FK_GUILD_ITEM_GUILD_ID: &str = "fk-guild_item-guild_id";
static FK_GUILD_ITEM_ITEM_ID: &str = "fk-guild_item-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildItem::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildItem::Id))
                    .col(integer(GuildItem::GuildId))
                    .col(integer(GuildItem::ItemId))
                    .col(string_len_null(GuildItem::Note, 140))
                    .col(string_len_null(GuildItem::Priority, 140))
                    .col(integer_null(GuildItem::CreatedBy))
                    .col(integer_null(GuildItem::UpdatedBy))
                    .col(timestamp(GuildItem::CreatedAt))
                    .col(timestamp(GuildItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One note per guild & item
        manager
            .create_index(
                Index::create()
                    .name(IDX_GUILD_ITEM_GUILD_ID_ITEM_ID)
                    .table(GuildItem::Table)
                    .col(GuildItem::GuildId)
                    .col(GuildItem::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GUILD_ITEM_GUILD_ID)
                    .from_tbl(GuildItem::Table)
                    .from_col(GuildItem::GuildId)
                    .to_tbl(Guild::Table)
                    .to_col(Guild::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GUILD_ITEM_ITEM_ID)
                    .from_tbl(GuildItem::Table)
                    .from_col(GuildItem::ItemId)
                    .to_tbl(Item::Table)
                    .to_col(Item::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GUILD_ITEM_ITEM_ID)
                    .table(GuildItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GUILD_ITEM_GUILD_ID)
                    .table(GuildItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GUILD_ITEM_GUILD_ID_ITEM_ID)
                    .table(GuildItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GuildItem {
    Table,
    Id,
    GuildId,
    ItemId,
    Note,
    Priority,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
