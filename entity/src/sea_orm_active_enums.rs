use sea_orm::entity::prelude::*;

/// Which list a `character_item` row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ItemListType {
    #[sea_orm(string_value = "wishlist")]
    Wishlist,
    #[sea_orm(string_value = "prio")]
    Prio,
    #[sea_orm(string_value = "received")]
    Received,
    #[sea_orm(string_value = "recipe")]
    Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AuditLogType {
    #[sea_orm(string_value = "assign")]
    Assign,
    #[sea_orm(string_value = "item_note")]
    ItemNote,
    #[sea_orm(string_value = "wishlist")]
    Wishlist,
    #[sea_orm(string_value = "prio")]
    Prio,
}
