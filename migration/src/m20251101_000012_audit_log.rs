use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_guild::Guild, m20251101_000010_batch::Batch};

static IDX_AUDIT_LOG_GUILD_ID_CREATED_AT: &str = "idx-audit_log-guild_id-created_at";
static IDX_AUDIT_LOG_BATCH_ID: &str = "idx-audit_log-batch_id";
static FK_AUDIT_LOG_GUILD_ID: &str = "fk-audit_log-guild_id";
static FK_AUDIT_LOG_BATCH_ID: &str = "fk-audit_log-batch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer(AuditLog::GuildId))
                    .col(integer_null(AuditLog::MemberId))
                    .col(text(AuditLog::Description))
                    .col(string_len_null(AuditLog::Type, 20))
                    .col(integer_null(AuditLog::CharacterId))
                    .col(integer_null(AuditLog::ItemId))
                    .col(integer_null(AuditLog::RaidId))
                    .col(integer_null(AuditLog::BatchId))
                    .col(timestamp(AuditLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOG_GUILD_ID_CREATED_AT)
                    .table(AuditLog::Table)
                    .col(AuditLog::GuildId)
                    .col(AuditLog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOG_BATCH_ID)
                    .table(AuditLog::Table)
                    .col(AuditLog::BatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_LOG_GUILD_ID)
                    .from_tbl(AuditLog::Table)
                    .from_col(AuditLog::GuildId)
                    .to_tbl(Guild::Table)
                    .to_col(Guild::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_LOG_BATCH_ID)
                    .from_tbl(AuditLog::Table)
                    .from_col(AuditLog::BatchId)
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
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditLog {
    Table,
    Id,
    GuildId,
    MemberId,
    Description,
    Type,
    CharacterId,
    ItemId,
    RaidId,
    BatchId,
    CreatedAt,
}
