use sea_orm::entity::prelude::*;

/// Game item, keyed by the in-game item ID
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
    pub expansion_id: i32,
    pub name: String,
    pub quality: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_item_source::Entity")]
    ItemItemSource,
    #[sea_orm(has_many = "super::character_item::Entity")]
    CharacterItem,
    #[sea_orm(has_many = "super::guild_item::Entity")]
    GuildItem,
}

impl Related<super::item_item_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemItemSource.def()
    }
}

impl Related<super::character_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterItem.def()
    }
}

impl Related<super::guild_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
