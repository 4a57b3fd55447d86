use chrono::Utc;
use entity::sea_orm_active_enums::AuditLogType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::loot::LootFixtures};

impl<'a> LootFixtures<'a> {
    /// Insert an assignment batch recorded by `member_id`
    pub async fn insert_batch(
        &self,
        guild_id: i32,
        member_id: i32,
    ) -> Result<entity::batch::Model, TestError> {
        Ok(entity::prelude::Batch::insert(entity::batch::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            member_id: ActiveValue::Set(member_id),
            user_id: ActiveValue::Set(None),
            raid_id: ActiveValue::Set(None),
            name: ActiveValue::Set(None),
            note: ActiveValue::Set("Mock batch".to_string()),
            batch_type: ActiveValue::Set(AuditLogType::Assign),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert an untyped audit row without an acting member
    pub async fn insert_audit_log(
        &self,
        guild_id: i32,
        description: &str,
        character_id: Option<i32>,
    ) -> Result<entity::audit_log::Model, TestError> {
        Ok(
            entity::prelude::AuditLog::insert(entity::audit_log::ActiveModel {
                guild_id: ActiveValue::Set(guild_id),
                member_id: ActiveValue::Set(None),
                description: ActiveValue::Set(description.to_string()),
                log_type: ActiveValue::Set(None),
                character_id: ActiveValue::Set(character_id),
                item_id: ActiveValue::Set(None),
                raid_id: ActiveValue::Set(None),
                batch_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
