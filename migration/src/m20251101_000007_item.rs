use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_item_source::ItemSource;

static IDX_ITEM_EXPANSION_ID: &str = "idx-item-expansion_id";
static IDX_ITEM_ITEM_SOURCE_ITEM_ID: &str = "idx-item_item_source-item_id";
static IDX_ITEM_ITEM_SOURCE_ITEM_SOURCE_ID: &str = "idx-item_item_source-item_source_id";
static FK_ITEM_ITEM_SOURCE_ITEM_ID: &str = "fk-item_item_source-item_id";
static FK_ITEM_ITEM_SOURCE_ITEM_SOURCE_ID: &str = "fk-item_item_source-item_source_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Item IDs come from the game, they are never generated by us
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(integer(Item::ItemId).primary_key())
                    .col(integer(Item::ExpansionId))
                    .col(string(Item::Name))
                    .col(integer(Item::Quality).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_EXPANSION_ID)
                    .table(Item::Table)
                    .col(Item::ExpansionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ItemItemSource::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemItemSource::Id))
                    .col(integer(ItemItemSource::ItemId))
                    .col(integer(ItemItemSource::ItemSourceId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_ITEM_SOURCE_ITEM_ID)
                    .table(ItemItemSource::Table)
                    .col(ItemItemSource::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_ITEM_SOURCE_ITEM_SOURCE_ID)
                    .table(ItemItemSource::Table)
                    .col(ItemItemSource::ItemSourceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_ITEM_SOURCE_ITEM_ID)
                    .from_tbl(ItemItemSource::Table)
                    .from_col(ItemItemSource::ItemId)
                    .to_tbl(Item::Table)
                    .to_col(Item::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_ITEM_SOURCE_ITEM_SOURCE_ID)
                    .from_tbl(ItemItemSource::Table)
                    .from_col(ItemItemSource::ItemSourceId)
                    .to_tbl(ItemSource::Table)
                    .to_col(ItemSource::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemItemSource::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_EXPANSION_ID)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    ItemId,
    ExpansionId,
    Name,
    Quality,
}

#[derive(DeriveIden)]
enum ItemItemSource {
    Table,
    Id,
    ItemId,
    ItemSourceId,
}
