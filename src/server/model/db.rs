//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used across repositories, services and
//! controllers.

/// Type alias for guild database model.
///
/// # Fields (from `entity::guild::Model`)
/// - `id` - Primary key
/// - `name` / `slug` - Display name & URL slug
/// - `expansion_id` - Expansion whose items the guild tracks
/// - `is_prio_private` - Hides prio lists from members without `view.prios`
/// - `is_wishlist_private` - Hides wishlists from members without `view.wishlists`
pub type GuildModel = entity::guild::Model;

/// Type alias for guild member database model.
pub type MemberModel = entity::member::Model;

/// Type alias for guild role database model, `permissions` is a comma separated list.
pub type RoleModel = entity::role::Model;

/// Type alias for raid database model.
pub type RaidModel = entity::raid::Model;

/// Type alias for instance database model.
pub type InstanceModel = entity::instance::Model;

/// Type alias for item source (boss, chest, zone drop) database model.
pub type ItemSourceModel = entity::item_source::Model;

/// Type alias for item database model, keyed by the game's item ID.
pub type ItemModel = entity::item::Model;

/// Type alias for the per-guild item note & priority database model.
pub type GuildItemModel = entity::guild_item::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for character wishlist/prio/received/recipe database model.
///
/// # Fields (from `entity::character_item::Model`)
/// - `list_type` - Which list the row belongs to
/// - `order` - Position within the character's list, for prios the rank within the raid
/// - `is_received` / `received_at` - Set once the character was given the item
/// - `batch_id` - Bulk submission which created the row, if any
pub type CharacterItemModel = entity::character_item::Model;

/// Type alias for audit log database model.
pub type AuditLogModel = entity::audit_log::Model;

/// Type alias for batch database model.
pub type BatchModel = entity::batch::Model;
