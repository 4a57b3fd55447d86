use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::ItemListType;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Fields of a received item row created by a loot assignment
#[derive(Debug, Clone)]
pub struct NewReceivedItem {
    pub character_id: i32,
    pub item_id: i32,
    pub added_by: i32,
    pub raid_id: Option<i32>,
    pub batch_id: i32,
    pub is_offspec: bool,
    pub received_at: NaiveDateTime,
    pub note: Option<String>,
    pub officer_note: Option<String>,
    pub import_id: Option<String>,
}

pub struct CharacterItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterItemRepository<'a, C> {
    /// Creates a new instance of [`CharacterItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rows of one list type held by the guild's characters, paired with the character.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose characters are considered
    /// - `item_ids` - Restrict to these items, `None` for every item
    /// - `list_type` - Wishlist, prio, received or recipe
    /// - `unreceived_only` - Skip rows already flagged as received
    pub async fn get_for_guild(
        &self,
        guild_id: i32,
        item_ids: Option<Vec<i32>>,
        list_type: ItemListType,
        unreceived_only: bool,
    ) -> Result<Vec<(entity::character_item::Model, entity::character::Model)>, DbErr> {
        let mut query = entity::prelude::CharacterItem::find()
            .find_also_related(entity::prelude::Character)
            .filter(entity::character::Column::GuildId.eq(guild_id))
            .filter(entity::character_item::Column::ListType.eq(list_type));

        if let Some(item_ids) = item_ids {
            if item_ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::character_item::Column::ItemId.is_in(item_ids));
        }

        if unreceived_only {
            query = query.filter(entity::character_item::Column::IsReceived.eq(false));
        }

        let rows = query
            .order_by_asc(entity::character_item::Column::Order)
            .order_by_asc(entity::character_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, character)| character.map(|c| (row, c)))
            .collect())
    }

    /// Finds the single row of a character's list which an assigned item should settle.
    ///
    /// Unreceived rows win over received ones, then the lowest order. When
    /// `include_received` is false only unreceived rows are considered.
    pub async fn find_best_match(
        &self,
        character_id: i32,
        item_id: i32,
        list_type: ItemListType,
        include_received: bool,
    ) -> Result<Option<entity::character_item::Model>, DbErr> {
        let mut query = entity::prelude::CharacterItem::find()
            .filter(entity::character_item::Column::CharacterId.eq(character_id))
            .filter(entity::character_item::Column::ItemId.eq(item_id))
            .filter(entity::character_item::Column::ListType.eq(list_type));

        if !include_received {
            query = query.filter(entity::character_item::Column::IsReceived.eq(false));
        }

        query
            .order_by_asc(entity::character_item::Column::IsReceived)
            .order_by_asc(entity::character_item::Column::Order)
            .order_by_asc(entity::character_item::Column::Id)
            .one(self.db)
            .await
    }

    /// Inserts a received row at the top of the character's received list
    pub async fn create_received(
        &self,
        item: NewReceivedItem,
    ) -> Result<entity::character_item::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::CharacterItem::insert(entity::character_item::ActiveModel {
            character_id: ActiveValue::Set(item.character_id),
            item_id: ActiveValue::Set(item.item_id),
            added_by: ActiveValue::Set(Some(item.added_by)),
            raid_id: ActiveValue::Set(item.raid_id),
            batch_id: ActiveValue::Set(Some(item.batch_id)),
            list_type: ActiveValue::Set(ItemListType::Received),
            order: ActiveValue::Set(0),
            is_offspec: ActiveValue::Set(item.is_offspec),
            is_received: ActiveValue::Set(true),
            received_at: ActiveValue::Set(Some(item.received_at)),
            note: ActiveValue::Set(item.note),
            officer_note: ActiveValue::Set(item.officer_note),
            import_id: ActiveValue::Set(item.import_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Flags a wishlist or prio row as received
    pub async fn mark_received(
        &self,
        row: entity::character_item::Model,
        received_at: NaiveDateTime,
    ) -> Result<entity::character_item::Model, DbErr> {
        let mut row_am = row.into_active_model();
        row_am.is_received = ActiveValue::Set(true);
        row_am.received_at = ActiveValue::Set(Some(received_at));
        row_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row_am.update(self.db).await
    }

    /// Deletes a row
    ///
    /// Returns OK regardless of the row existing, check [`DeleteResult::rows_affected`] to
    /// confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CharacterItem::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Shifts prio rows ranked below a removed row up by one so the ranking stays gap free.
    ///
    /// Only prio rows for the same item & raid held by `character_ids` are renumbered, a
    /// `None` raid matches rows without a raid.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of renumbered rows
    pub async fn close_prio_gap(
        &self,
        item_id: i32,
        raid_id: Option<i32>,
        character_ids: Vec<i32>,
        removed_order: i32,
    ) -> Result<u64, DbErr> {
        if character_ids.is_empty() {
            return Ok(0);
        }

        let raid_condition = match raid_id {
            Some(raid_id) => entity::character_item::Column::RaidId.eq(raid_id),
            None => entity::character_item::Column::RaidId.is_null(),
        };

        let result = entity::prelude::CharacterItem::update_many()
            .col_expr(
                entity::character_item::Column::Order,
                Expr::col(entity::character_item::Column::Order).sub(1),
            )
            .filter(
                Condition::all()
                    .add(entity::character_item::Column::ItemId.eq(item_id))
                    .add(entity::character_item::Column::ListType.eq(ItemListType::Prio))
                    .add(raid_condition)
                    .add(entity::character_item::Column::CharacterId.is_in(character_ids))
                    .add(entity::character_item::Column::Order.gt(removed_order)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests;
