use chrono::Utc;
use entity::sea_orm_active_enums::AuditLogType;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Rows shown per audit log page
pub const AUDIT_LOG_PAGE_SIZE: u64 = 200;

#[derive(Debug, Clone, Default)]
pub struct NewAuditLog {
    pub guild_id: i32,
    pub member_id: Option<i32>,
    pub description: String,
    pub log_type: Option<AuditLogType>,
    pub character_id: Option<i32>,
    pub item_id: Option<i32>,
    pub raid_id: Option<i32>,
    pub batch_id: Option<i32>,
}

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, log: NewAuditLog) -> Result<entity::audit_log::Model, DbErr> {
        entity::prelude::AuditLog::insert(entity::audit_log::ActiveModel {
            guild_id: ActiveValue::Set(log.guild_id),
            member_id: ActiveValue::Set(log.member_id),
            description: ActiveValue::Set(log.description),
            log_type: ActiveValue::Set(log.log_type),
            character_id: ActiveValue::Set(log.character_id),
            item_id: ActiveValue::Set(log.item_id),
            raid_id: ActiveValue::Set(log.raid_id),
            batch_id: ActiveValue::Set(log.batch_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Newest guild audit rows first, optionally narrowed to a batch or character
    pub async fn get_by_guild(
        &self,
        guild_id: i32,
        batch_id: Option<i32>,
        character_id: Option<i32>,
    ) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        let mut query = entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::GuildId.eq(guild_id));

        if let Some(batch_id) = batch_id {
            query = query.filter(entity::audit_log::Column::BatchId.eq(batch_id));
        }
        if let Some(character_id) = character_id {
            query = query.filter(entity::audit_log::Column::CharacterId.eq(character_id));
        }

        query
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .limit(AUDIT_LOG_PAGE_SIZE)
            .all(self.db)
            .await
    }
}
