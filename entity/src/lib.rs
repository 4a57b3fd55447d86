pub mod prelude;

pub mod audit_log;
pub mod batch;
pub mod character;
pub mod character_item;
pub mod guild;
pub mod guild_item;
pub mod instance;
pub mod item;
pub mod item_item_source;
pub mod item_source;
pub mod member;
pub mod raid;
pub mod role;
pub mod sea_orm_active_enums;
