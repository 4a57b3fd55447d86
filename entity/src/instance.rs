use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "instance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub expansion_id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_source::Entity")]
    ItemSource,
}

impl Related<super::item_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemSource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
