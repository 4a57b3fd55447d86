use entity::sea_orm_active_enums::ItemListType;
use lootledger_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::server::{
    model::{
        assignment::{AssignmentEntry, AssignmentRequest},
        guild::GuildContext,
    },
    service::{assignment::AssignmentService, guild::GuildService},
};

mod reconcile_prio;

async fn context(test: &TestSetup, guild_id: i32, user_id: i32) -> GuildContext {
    GuildService::new(&test.state.db)
        .resolve_context(guild_id, user_id)
        .await
        .unwrap()
}

fn entry(index: usize, item_id: Option<i32>, character_id: Option<i32>) -> AssignmentEntry {
    AssignmentEntry {
        index,
        item_id,
        character_id,
        ..Default::default()
    }
}

fn request(entries: Vec<AssignmentEntry>) -> AssignmentRequest {
    AssignmentRequest {
        entries,
        ..Default::default()
    }
}

/// Rows of one list type for a character, ordered by ID
async fn character_rows(
    test: &TestSetup,
    character_id: i32,
    list_type: ItemListType,
) -> Vec<entity::character_item::Model> {
    entity::prelude::CharacterItem::find()
        .filter(entity::character_item::Column::CharacterId.eq(character_id))
        .filter(entity::character_item::Column::ListType.eq(list_type))
        .order_by_asc(entity::character_item::Column::Id)
        .all(&test.state.db)
        .await
        .unwrap()
}

async fn audit_rows(test: &TestSetup, batch_id: i32) -> Vec<entity::audit_log::Model> {
    entity::prelude::AuditLog::find()
        .filter(entity::audit_log::Column::BatchId.eq(batch_id))
        .order_by_asc(entity::audit_log::Column::Id)
        .all(&test.state.db)
        .await
        .unwrap()
}

async fn count_received(test: &TestSetup) -> u64 {
    entity::prelude::CharacterItem::find()
        .filter(entity::character_item::Column::ListType.eq(ItemListType::Received))
        .count(&test.state.db)
        .await
        .unwrap()
}
