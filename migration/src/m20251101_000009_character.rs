use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_guild::Guild, m20251101_000003_member::Member, m20251101_000004_raid::Raid,
};

static IDX_CHARACTER_GUILD_ID: &str = "idx-character-guild_id";
static IDX_CHARACTER_MEMBER_ID: &str = "idx-character-member_id";
static FK_CHARACTER_GUILD_ID: &str = "fk-character-guild_id";
static FK_CHARACTER_MEMBER_ID: &str = "fk-character-member_id";
static FK_CHARACTER_RAID_ID: &str = "fk-character-raid_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer(Character::GuildId))
                    .col(integer_null(Character::MemberId))
                    .col(integer_null(Character::RaidId))
                    .col(string(Character::Name))
                    .col(string(Character::Slug))
                    .col(integer_null(Character::Level))
                    .col(string_null(Character::Race))
                    .col(string_null(Character::Class))
                    .col(string_null(Character::Spec))
                    .col(boolean(Character::IsAlt).default(false))
                    .col(text_null(Character::PublicNote))
                    .col(text_null(Character::OfficerNote))
                    .col(timestamp_null(Character::InactiveAt))
                    .col(timestamp(Character::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_GUILD_ID)
                    .table(Character::Table)
                    .col(Character::GuildId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_MEMBER_ID)
                    .table(Character::Table)
                    .col(Character::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_GUILD_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::GuildId)
                    .to_tbl(Guild::Table)
                    .to_col(Guild::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_MEMBER_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::MemberId)
                    .to_tbl(Member::Table)
                    .to_col(Member::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_RAID_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::RaidId)
                    .to_tbl(Raid::Table)
                    .to_col(Raid::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_CHARACTER_RAID_ID,
            FK_CHARACTER_MEMBER_ID,
            FK_CHARACTER_GUILD_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(Character::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_CHARACTER_MEMBER_ID, IDX_CHARACTER_GUILD_ID] {
            manager
                .drop_index(Index::drop().name(idx).table(Character::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    GuildId,
    MemberId,
    RaidId,
    Name,
    Slug,
    Level,
    Race,
    Class,
    Spec,
    IsAlt,
    PublicNote,
    OfficerNote,
    InactiveAt,
    CreatedAt,
}
