use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_guild::Guild;

static IDX_ROLE_GUILD_ID: &str = "idx-role-guild_id";
static FK_ROLE_GUILD_ID: &str = "fk-role-guild_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(integer(Role::GuildId))
                    .col(string(Role::Name))
                    .col(text(Role::Permissions))
                    .col(timestamp(Role::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_GUILD_ID)
                    .table(Role::Table)
                    .col(Role::GuildId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_GUILD_ID)
                    .from_tbl(Role::Table)
                    .from_col(Role::GuildId)
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
                    .name(FK_ROLE_GUILD_ID)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_GUILD_ID)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    GuildId,
    Name,
    Permissions,
    CreatedAt,
}
