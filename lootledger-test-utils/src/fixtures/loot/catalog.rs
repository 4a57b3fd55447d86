use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::loot::LootFixtures};

impl<'a> LootFixtures<'a> {
    pub async fn insert_instance(
        &self,
        expansion_id: i32,
        slug: &str,
        name: &str,
        order: i32,
    ) -> Result<entity::instance::Model, TestError> {
        Ok(entity::prelude::Instance::insert(entity::instance::ActiveModel {
            expansion_id: ActiveValue::Set(expansion_id),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            order: ActiveValue::Set(order),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a boss or other source of drops within an instance
    pub async fn insert_item_source(
        &self,
        instance_id: i32,
        name: &str,
        order: i32,
    ) -> Result<entity::item_source::Model, TestError> {
        Ok(
            entity::prelude::ItemSource::insert(entity::item_source::ActiveModel {
                instance_id: ActiveValue::Set(instance_id),
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(name.to_lowercase().replace(' ', "-")),
                order: ActiveValue::Set(order),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an epic quality item with a fixed game item ID
    pub async fn insert_item(
        &self,
        item_id: i32,
        expansion_id: i32,
        name: &str,
    ) -> Result<entity::item::Model, TestError> {
        Ok(entity::prelude::Item::insert(entity::item::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            expansion_id: ActiveValue::Set(expansion_id),
            name: ActiveValue::Set(name.to_string()),
            quality: ActiveValue::Set(4),
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Make `item_id` drop from the source
    pub async fn link_item_source(
        &self,
        item_id: i32,
        item_source_id: i32,
    ) -> Result<entity::item_item_source::Model, TestError> {
        Ok(
            entity::prelude::ItemItemSource::insert(entity::item_item_source::ActiveModel {
                item_id: ActiveValue::Set(item_id),
                item_source_id: ActiveValue::Set(item_source_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert the guild's note & priority for an item
    pub async fn insert_guild_item(
        &self,
        guild_id: i32,
        item_id: i32,
        note: Option<&str>,
        priority: Option<&str>,
    ) -> Result<entity::guild_item::Model, TestError> {
        Ok(
            entity::prelude::GuildItem::insert(entity::guild_item::ActiveModel {
                guild_id: ActiveValue::Set(guild_id),
                item_id: ActiveValue::Set(item_id),
                note: ActiveValue::Set(note.map(str::to_string)),
                priority: ActiveValue::Set(priority.map(str::to_string)),
                created_by: ActiveValue::Set(None),
                updated_by: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
