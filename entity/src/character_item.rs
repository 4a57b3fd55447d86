use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ItemListType;

/// A character's wishlist, prio, received or recipe entry for an item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub character_id: i32,
    pub item_id: i32,
    pub added_by: Option<i32>,
    pub raid_id: Option<i32>,
    pub batch_id: Option<i32>,
    #[sea_orm(column_name = "type")]
    pub list_type: ItemListType,
    pub order: i32,
    pub is_offspec: bool,
    pub is_received: bool,
    pub received_at: Option<DateTime>,
    pub note: Option<String>,
    pub officer_note: Option<String>,
    pub import_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::ItemId"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::raid::Entity",
        from = "Column::RaidId",
        to = "super::raid::Column::Id"
    )]
    Raid,
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id"
    )]
    Batch,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::raid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raid.def()
    }
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
