use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_guild::Guild, m20251101_000002_role::Role};

static IDX_MEMBER_GUILD_ID_USER_ID: &str = "idx-member-guild_id-user_id";
static FK_MEMBER_GUILD_ID: &str = "fk-member-guild_id";
static FK_MEMBER_ROLE_ID: &str = "fk-member-role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer(Member::GuildId))
                    .col(integer(Member::UserId))
                    .col(integer_null(Member::RoleId))
                    .col(string(Member::Username))
                    .col(string(Member::Slug))
                    .col(timestamp(Member::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A user has at most one membership per guild
        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_GUILD_ID_USER_ID)
                    .table(Member::Table)
                    .col(Member::GuildId)
                    .col(Member::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_GUILD_ID)
                    .from_tbl(Member::Table)
                    .from_col(Member::GuildId)
                    .to_tbl(Guild::Table)
                    .to_col(Guild::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_ROLE_ID)
                    .from_tbl(Member::Table)
                    .from_col(Member::RoleId)
                    .to_tbl(Role::Table)
                    .to_col(Role::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEMBER_ROLE_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEMBER_GUILD_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBER_GUILD_ID_USER_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    GuildId,
    UserId,
    RoleId,
    Username,
    Slug,
    CreatedAt,
}
