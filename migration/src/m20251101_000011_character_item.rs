use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_raid::Raid, m20251101_000007_item::Item,
    m20251101_000009_character::Character, m20251101_000010_batch::Batch,
};

static IDX_CHARACTER_ITEM_CHARACTER_ID_ITEM_ID: &str = "idx-character_item-character_id-item_id";
static IDX_CHARACTER_ITEM_ITEM_ID_TYPE: &str = "idx-character_item-item_id-type";
static FK_CHARACTER_ITEM_CHARACTER_ID: &str = "fk-character_item-character_id";
static FK_CHARACTER_ITEM_ITEM_ID: &str = "fk-character_item-item_id";
static FK_CHARACTER_ITEM_RAID_ID: &str = "fk-character_item-raid_id";
static FK_CHARACTER_ITEM_BATCH_ID: &str = "fk-character_item-batch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacterItem::Id))
                    .col(integer(CharacterItem::CharacterId))
                    .col(integer(CharacterItem::ItemId))
                    .col(integer_null(CharacterItem::AddedBy))
                    .col(integer_null(CharacterItem::RaidId))
                    .col(integer_null(CharacterItem::BatchId))
                    .col(string_len(CharacterItem::Type, 20))
                    .col(integer(CharacterItem::Order).default(0))
                    .col(boolean(CharacterItem::IsOffspec).default(false))
                    .col(boolean(CharacterItem::IsReceived).default(false))
                    .col(timestamp_null(CharacterItem::ReceivedAt))
                    .col(string_len_null(CharacterItem::Note, 140))
                    .col(string_len_null(CharacterItem::OfficerNote, 140))
                    .col(string_len_null(CharacterItem::ImportId, 20))
                    .col(timestamp(CharacterItem::CreatedAt))
                    .col(timestamp(CharacterItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_ITEM_CHARACTER_ID_ITEM_ID)
                    .table(CharacterItem::Table)
                    .col(CharacterItem::CharacterId)
                    .col(CharacterItem::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_ITEM_ITEM_ID_TYPE)
                    .table(CharacterItem::Table)
                    .col(CharacterItem::ItemId)
                    .col(CharacterItem::Type)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_ITEM_CHARACTER_ID)
                    .from_tbl(CharacterItem::Table)
                    .from_col(CharacterItem::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_ITEM_ITEM_ID)
                    .from_tbl(CharacterItem::Table)
                    .from_col(CharacterItem::ItemId)
                    .to_tbl(Item::Table)
                    .to_col(Item::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_ITEM_RAID_ID)
                    .from_tbl(CharacterItem::Table)
                    .from_col(CharacterItem::RaidId)
                    .to_tbl(Raid::Table)
                    .to_col(Raid::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_ITEM_BATCH_ID)
                    .from_tbl(CharacterItem::Table)
                    .from_col(CharacterItem::BatchId)
                    .to_tbl(Batch::Table)
                    .to_col(Batch::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CharacterItem {
    Table,
    Id,
    CharacterId,
    ItemId,
    AddedBy,
    RaidId,
    BatchId,
    Type,
    Order,
    IsOffspec,
    IsReceived,
    ReceivedAt,
    Note,
    OfficerNote,
    ImportId,
    CreatedAt,
    UpdatedAt,
}
