use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i32,
    pub member_id: Option<i32>,
    pub raid_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub level: Option<i32>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub spec: Option<String>,
    pub is_alt: bool,
    pub public_note: Option<String>,
    pub officer_note: Option<String>,
    pub inactive_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild::Entity",
        from = "Column::GuildId",
        to = "super::guild::Column::Id"
    )]
    Guild,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::raid::Entity",
        from = "Column::RaidId",
        to = "super::raid::Column::Id"
    )]
    Raid,
    #[sea_orm(has_many = "super::character_item::Entity")]
    CharacterItem,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::raid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raid.def()
    }
}

impl Related<super::character_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
