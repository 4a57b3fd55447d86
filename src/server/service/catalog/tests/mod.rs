use entity::sea_orm_active_enums::ItemListType;
use lootledger_test_utils::prelude::*;

use crate::server::{
    model::guild::GuildContext,
    service::{catalog::CatalogService, guild::GuildService},
};

mod get_item_detail;
mod list_instance_items;
mod list_recipes;

/// Resolves the fixture member's context the same way a request would
async fn context(test: &TestSetup, guild_id: i32, user_id: i32) -> GuildContext {
    GuildService::new(&test.state.db)
        .resolve_context(guild_id, user_id)
        .await
        .unwrap()
}
