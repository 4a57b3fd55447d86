use chrono::Utc;
use entity::sea_orm_active_enums::AuditLogType;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

#[derive(Debug, Clone)]
pub struct NewBatch {
    pub guild_id: i32,
    pub member_id: i32,
    pub user_id: Option<i32>,
    pub raid_id: Option<i32>,
    pub name: Option<String>,
    pub note: String,
    pub batch_type: AuditLogType,
}

pub struct BatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BatchRepository<'a, C> {
    /// Creates a new instance of [`BatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, batch: NewBatch) -> Result<entity::batch::Model, DbErr> {
        entity::prelude::Batch::insert(entity::batch::ActiveModel {
            guild_id: ActiveValue::Set(batch.guild_id),
            member_id: ActiveValue::Set(batch.member_id),
            user_id: ActiveValue::Set(batch.user_id),
            raid_id: ActiveValue::Set(batch.raid_id),
            name: ActiveValue::Set(batch.name),
            note: ActiveValue::Set(batch.note),
            batch_type: ActiveValue::Set(batch.batch_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a batch only if it belongs to the guild
    pub async fn find_in_guild(
        &self,
        guild_id: i32,
        batch_id: i32,
    ) -> Result<Option<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find_by_id(batch_id)
            .filter(entity::batch::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }
}
