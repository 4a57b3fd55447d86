use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(string(Guild::Name))
                    .col(string(Guild::Slug))
                    .col(integer(Guild::ExpansionId))
                    .col(boolean(Guild::IsPrioPrivate).default(false))
                    .col(boolean(Guild::IsWishlistPrivate).default(false))
                    .col(timestamp(Guild::CreatedAt))
                    .col(timestamp(Guild::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    Name,
    Slug,
    ExpansionId,
    IsPrioPrivate,
    IsWishlistPrivate,
    CreatedAt,
    UpdatedAt,
}
