use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every (item, source) pair of an instance for items of the given expansion.
    ///
    /// An item dropping from several sources of the instance appears once per source,
    /// callers deduplicate as needed.
    pub async fn get_sourced_by_instance(
        &self,
        instance_id: i32,
        expansion_id: i32,
    ) -> Result<Vec<(entity::item::Model, entity::item_source::Model)>, DbErr> {
        let sources: HashMap<i32, entity::item_source::Model> = entity::prelude::ItemSource::find()
            .filter(entity::item_source::Column::InstanceId.eq(instance_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        if sources.is_empty() {
            return Ok(Vec::new());
        }

        let links = entity::prelude::ItemItemSource::find()
            .filter(entity::item_item_source::Column::ItemSourceId.is_in(sources.keys().copied()))
            .all(self.db)
            .await?;

        let items: HashMap<i32, entity::item::Model> = entity::prelude::Item::find()
            .filter(entity::item::Column::ItemId.is_in(links.iter().map(|l| l.item_id)))
            .filter(entity::item::Column::ExpansionId.eq(expansion_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|i| (i.item_id, i))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|link| {
                let item = items.get(&link.item_id)?;
                let source = sources.get(&link.item_source_id)?;
                Some((item.clone(), source.clone()))
            })
            .collect())
    }

    /// Finds an item, only if it belongs to the given expansion
    pub async fn find_in_expansion(
        &self,
        item_id: i32,
        expansion_id: i32,
    ) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(item_id)
            .filter(entity::item::Column::ExpansionId.eq(expansion_id))
            .one(self.db)
            .await
    }

    /// Items of the given expansion among `item_ids`
    pub async fn get_in_expansion(
        &self,
        item_ids: Vec<i32>,
        expansion_id: i32,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Item::find()
            .filter(entity::item::Column::ItemId.is_in(item_ids))
            .filter(entity::item::Column::ExpansionId.eq(expansion_id))
            .order_by_asc(entity::item::Column::Name)
            .all(self.db)
            .await
    }

    /// Sources an item drops from, in display order
    pub async fn get_sources(&self, item_id: i32) -> Result<Vec<entity::item_source::Model>, DbErr> {
        let source_ids: Vec<i32> = entity::prelude::ItemItemSource::find()
            .filter(entity::item_item_source::Column::ItemId.eq(item_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| l.item_source_id)
            .collect();

        if source_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ItemSource::find()
            .filter(entity::item_source::Column::Id.is_in(source_ids))
            .order_by_asc(entity::item_source::Column::Order)
            .all(self.db)
            .await
    }
}
