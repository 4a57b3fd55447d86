use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user's membership in a guild along with the member's role
    pub async fn find_by_user_id(
        &self,
        guild_id: i32,
        user_id: i32,
    ) -> Result<Option<(entity::member::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::GuildId.eq(guild_id))
            .filter(entity::member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await
    }

    /// Finds a member by ID, only if they belong to the guild
    pub async fn find_in_guild(
        &self,
        guild_id: i32,
        member_id: i32,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(member_id)
            .filter(entity::member::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(&self, member_ids: Vec<i32>) -> Result<Vec<entity::member::Model>, DbErr> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(member_ids))
            .all(self.db)
            .await
    }
}
