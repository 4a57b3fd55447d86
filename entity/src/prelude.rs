pub use super::audit_log::Entity as AuditLog;
pub use super::batch::Entity as Batch;
pub use super::character::Entity as Character;
pub use super::character_item::Entity as CharacterItem;
pub use super::guild::Entity as Guild;
pub use super::guild_item::Entity as GuildItem;
pub use super::instance::Entity as Instance;
pub use super::item::Entity as Item;
pub use super::item_item_source::Entity as ItemItemSource;
pub use super::item_source::Entity as ItemSource;
pub use super::member::Entity as Member;
pub use super::raid::Entity as Raid;
pub use super::role::Entity as Role;
