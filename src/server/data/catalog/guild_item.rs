use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct GuildItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildItemRepository<'a, C> {
    /// Creates a new instance of [`GuildItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: i32,
        item_id: i32,
    ) -> Result<Option<entity::guild_item::Model>, DbErr> {
        entity::prelude::GuildItem::find()
            .filter(entity::guild_item::Column::GuildId.eq(guild_id))
            .filter(entity::guild_item::Column::ItemId.eq(item_id))
            .one(self.db)
            .await
    }

    /// The guild's notes for any of the given items
    pub async fn get_by_items(
        &self,
        guild_id: i32,
        item_ids: Vec<i32>,
    ) -> Result<Vec<entity::guild_item::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GuildItem::find()
            .filter(entity::guild_item::Column::GuildId.eq(guild_id))
            .filter(entity::guild_item::Column::ItemId.is_in(item_ids))
            .all(self.db)
            .await
    }

    /// Creates the guild's note row for an item, stamping the creating member
    pub async fn create(
        &self,
        guild_id: i32,
        item_id: i32,
        note: Option<String>,
        priority: Option<String>,
        member_id: i32,
    ) -> Result<entity::guild_item::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::GuildItem::insert(entity::guild_item::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            item_id: ActiveValue::Set(item_id),
            note: ActiveValue::Set(note),
            priority: ActiveValue::Set(priority),
            created_by: ActiveValue::Set(Some(member_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Replaces note & priority of an existing row, stamping the updating member
    pub async fn update(
        &self,
        guild_item: entity::guild_item::Model,
        note: Option<String>,
        priority: Option<String>,
        member_id: i32,
    ) -> Result<entity::guild_item::Model, DbErr> {
        let mut guild_item_am = guild_item.into_active_model();
        guild_item_am.note = ActiveValue::Set(note);
        guild_item_am.priority = ActiveValue::Set(priority);
        guild_item_am.updated_by = ActiveValue::Set(Some(member_id));
        guild_item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        guild_item_am.update(self.db).await
    }
}
