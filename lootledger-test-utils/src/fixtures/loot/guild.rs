use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::loot::LootFixtures};

/// Keeps generated names & slugs distinct across fixtures of one test
static SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_sequence() -> u32 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl<'a> LootFixtures<'a> {
    /// Insert a guild playing `expansion_id` with the given privacy flags
    pub async fn insert_guild(
        &self,
        expansion_id: i32,
        is_prio_private: bool,
        is_wishlist_private: bool,
    ) -> Result<entity::guild::Model, TestError> {
        let sequence = next_sequence();

        Ok(entity::prelude::Guild::insert(entity::guild::ActiveModel {
            name: ActiveValue::Set(format!("Guild {}", sequence)),
            slug: ActiveValue::Set(format!("guild-{}", sequence)),
            expansion_id: ActiveValue::Set(expansion_id),
            is_prio_private: ActiveValue::Set(is_prio_private),
            is_wishlist_private: ActiveValue::Set(is_wishlist_private),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a public classic guild with a member for user ID 1 holding `permissions`
    ///
    /// # Returns
    /// - `Ok((guild, member))` - The guild & the member, whose role grants `permissions`
    pub async fn insert_guild_with_member(
        &self,
        permissions: &[&str],
    ) -> Result<(entity::guild::Model, entity::member::Model), TestError> {
        let guild = self.insert_guild(1, false, false).await?;
        let role = self.insert_role(guild.id, permissions).await?;
        let member = self.insert_member(guild.id, 1, Some(role.id)).await?;

        Ok((guild, member))
    }

    /// Insert a role granting `permissions`, stored as comma separated keys
    pub async fn insert_role(
        &self,
        guild_id: i32,
        permissions: &[&str],
    ) -> Result<entity::role::Model, TestError> {
        Ok(entity::prelude::Role::insert(entity::role::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            name: ActiveValue::Set(format!("Role {}", next_sequence())),
            permissions: ActiveValue::Set(permissions.join(",")),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_member(
        &self,
        guild_id: i32,
        user_id: i32,
        role_id: Option<i32>,
    ) -> Result<entity::member::Model, TestError> {
        let sequence = next_sequence();

        Ok(entity::prelude::Member::insert(entity::member::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
            username: ActiveValue::Set(format!("Officer{}", sequence)),
            slug: ActiveValue::Set(format!("officer{}", sequence)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_raid(
        &self,
        guild_id: i32,
        name: &str,
    ) -> Result<entity::raid::Model, TestError> {
        Ok(entity::prelude::Raid::insert(entity::raid::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(name.to_lowercase().replace(' ', "-")),
            color: ActiveValue::Set(Some("ff8000".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
