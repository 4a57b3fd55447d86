use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_instance::Instance;

static IDX_ITEM_SOURCE_INSTANCE_ID: &str = "idx-item_source-instance_id";
static FK_ITEM_SOURCE_INSTANCE_ID: &str = "fk-item_source-instance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemSource::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemSource::Id))
                    .col(integer(ItemSource::InstanceId))
                    .col(string(ItemSource::Name))
                    .col(string(ItemSource::Slug))
                    .col(integer(ItemSource::Order).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_SOURCE_INSTANCE_ID)
                    .table(ItemSource::Table)
                    .col(ItemSource::InstanceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_SOURCE_INSTANCE_ID)
                    .from_tbl(ItemSource::Table)
                    .from_col(ItemSource::InstanceId)
                    .to_tbl(Instance::Table)
                    .to_col(Instance::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_SOURCE_INSTANCE_ID)
                    .table(ItemSource::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_SOURCE_INSTANCE_ID)
                    .table(ItemSource::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemSource::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemSource {
    Table,
    Id,
    InstanceId,
    Name,
    Slug,
    Order,
}
