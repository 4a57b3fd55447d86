use lootledger_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::{
    model::{guild::GuildContext, note::NoteEdit},
    service::{guild::GuildService, note::NoteService},
};


async fn context(test: &TestSetup, guild_id: i32, user_id: i32) -> GuildContext {
    GuildService::new(&test.state.db)
        .resolve_context(guild_id, user_id)
        .await
        .unwrap()
}

fn edit(item_id: i32, note: Option<&str>, priority: Option<&str>) -> NoteEdit {
    NoteEdit {
        item_id,
        note: note.map(str::to_string),
        priority: priority.map(str::to_string),
    }
}

async fn guild_item_count(test: &TestSetup, guild_id: i32) -> u64 {
    entity::prelude::GuildItem::find()
        .filter(entity::guild_item::Column::GuildId.eq(guild_id))
        .count(&test.state.db)
        .await
        .unwrap()
}

async fn audit_descriptions(test: &TestSetup, guild_id: i32) -> Vec<String> {
    entity::prelude::AuditLog::find()
        .filter(entity::audit_log::Column::GuildId.eq(guild_id))
        .all(&test.state.db)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.description)
        .collect()
}
