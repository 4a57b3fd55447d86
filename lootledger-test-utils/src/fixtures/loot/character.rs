use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::ItemListType;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::loot::LootFixtures};

impl<'a> LootFixtures<'a> {
    /// Insert an active level 60 main character, optionally claimed by a member
    pub async fn insert_character(
        &self,
        guild_id: i32,
        member_id: Option<i32>,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                guild_id: ActiveValue::Set(guild_id),
                member_id: ActiveValue::Set(member_id),
                raid_id: ActiveValue::Set(None),
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(name.to_lowercase()),
                level: ActiveValue::Set(Some(60)),
                race: ActiveValue::Set(Some("Orc".to_string())),
                class: ActiveValue::Set(Some("Warrior".to_string())),
                spec: ActiveValue::Set(None),
                is_alt: ActiveValue::Set(false),
                public_note: ActiveValue::Set(None),
                officer_note: ActiveValue::Set(None),
                inactive_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn set_character_inactive(
        &self,
        character_id: i32,
        inactive_at: NaiveDateTime,
    ) -> Result<entity::character::Model, TestError> {
        Ok(entity::character::ActiveModel {
            id: ActiveValue::Unchanged(character_id),
            inactive_at: ActiveValue::Set(Some(inactive_at)),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?)
    }

    pub async fn set_character_officer_note(
        &self,
        character_id: i32,
        officer_note: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(entity::character::ActiveModel {
            id: ActiveValue::Unchanged(character_id),
            officer_note: ActiveValue::Set(Some(officer_note.to_string())),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?)
    }

    pub async fn set_character_raid(
        &self,
        character_id: i32,
        raid_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        Ok(entity::character::ActiveModel {
            id: ActiveValue::Unchanged(character_id),
            raid_id: ActiveValue::Set(raid_id),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?)
    }

    /// Insert an unreceived list row for a character
    ///
    /// # Arguments
    /// - `character_id` - Owner of the row
    /// - `item_id` - Item the row refers to, must exist
    /// - `list_type` - Wishlist, prio, received or recipe
    /// - `order` - Rank within the list
    /// - `raid_id` - Raid a prio applies to
    pub async fn insert_character_item(
        &self,
        character_id: i32,
        item_id: i32,
        list_type: ItemListType,
        order: i32,
        raid_id: Option<i32>,
    ) -> Result<entity::character_item::Model, TestError> {
        Ok(
            entity::prelude::CharacterItem::insert(entity::character_item::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                item_id: ActiveValue::Set(item_id),
                added_by: ActiveValue::Set(None),
                raid_id: ActiveValue::Set(raid_id),
                batch_id: ActiveValue::Set(None),
                list_type: ActiveValue::Set(list_type),
                order: ActiveValue::Set(order),
                is_offspec: ActiveValue::Set(false),
                is_received: ActiveValue::Set(false),
                received_at: ActiveValue::Set(None),
                note: ActiveValue::Set(None),
                officer_note: ActiveValue::Set(None),
                import_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn mark_character_item_received(
        &self,
        character_item_id: i32,
    ) -> Result<entity::character_item::Model, TestError> {
        Ok(entity::character_item::ActiveModel {
            id: ActiveValue::Unchanged(character_item_id),
            is_received: ActiveValue::Set(true),
            received_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?)
    }

    pub async fn set_character_item_officer_note(
        &self,
        character_item_id: i32,
        officer_note: &str,
    ) -> Result<entity::character_item::Model, TestError> {
        Ok(entity::character_item::ActiveModel {
            id: ActiveValue::Unchanged(character_item_id),
            officer_note: ActiveValue::Set(Some(officer_note.to_string())),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?)
    }
}
