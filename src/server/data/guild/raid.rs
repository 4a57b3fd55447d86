use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct RaidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaidRepository<'a, C> {
    /// Creates a new instance of [`RaidRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a raid by ID, only if it belongs to the guild
    pub async fn find_in_guild(
        &self,
        guild_id: i32,
        raid_id: i32,
    ) -> Result<Option<entity::raid::Model>, DbErr> {
        entity::prelude::Raid::find_by_id(raid_id)
            .filter(entity::raid::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    /// All raids of the guild ordered by name
    pub async fn get_by_guild(&self, guild_id: i32) -> Result<Vec<entity::raid::Model>, DbErr> {
        entity::prelude::Raid::find()
            .filter(entity::raid::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::raid::Column::Name)
            .all(self.db)
            .await
    }
}
