pub use sea_orm_migration::prelude::*;

mod m20251101_000001_guild;
mod m20251101_000002_role;
mod m20251101_000003_member;
mod m20251101_000004_raid;
mod m20251101_000005_instance;
mod m20251101_000006_item_source;
mod m20251101_000007_item;
mod m20251101_000008_guild_item;
mod m20251101_000009_character;
mod m20251101_000010_batch;
mod m20251101_000011_character_item;
mod m20251101_000012_audit_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_guild::Migration),
            Box::new(m20251101_000002_role::Migration),
            Box::new(m20251101_000003_member::Migration),
            Box::new(m20251101_000004_raid::Migration),
            Box::new(m20251101_000005_instance::Migration),
            Box::new(m20251101_000006_item_source::Migration),
            Box::new(m20251101_000007_item::Migration),
            Box::new(m20251101_000008_guild_item::Migration),
            Box::new(m20251101_000009_character::Migration),
            Box::new(m20251101_000010_batch::Migration),
            Box::new(m20251101_000011_character_item::Migration),
            Box::new(m20251101_000012_audit_log::Migration),
        ]
    }
}
