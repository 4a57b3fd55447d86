use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct GuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRepository<'a, C> {
    /// Creates a new instance of [`GuildRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, guild_id: i32) -> Result<Option<entity::guild::Model>, DbErr> {
        entity::prelude::Guild::find_by_id(guild_id).one(self.db).await
    }
}
