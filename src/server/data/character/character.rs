use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every character of the guild, inactive characters included
    pub async fn get_by_guild(
        &self,
        guild_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// A member's characters in the guild with the raid each is assigned to
    pub async fn get_by_member(
        &self,
        guild_id: i32,
        member_id: i32,
    ) -> Result<Vec<(entity::character::Model, Option<entity::raid::Model>)>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::GuildId.eq(guild_id))
            .filter(entity::character::Column::MemberId.eq(member_id))
            .find_also_related(entity::prelude::Raid)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        character_ids: Vec<i32>,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids))
            .all(self.db)
            .await
    }
}
