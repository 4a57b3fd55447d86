use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::guild::{InstanceDto, RaidDto};

/// A character's wishlist, prio, received or recipe entry for an item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterLootDto {
    pub character_id: i32,
    pub name: String,
    pub slug: String,
    pub class: Option<String>,
    pub is_alt: bool,
    pub is_inactive: bool,
    pub raid_id: Option<i32>,
    pub order: i32,
    pub is_offspec: bool,
    pub is_received: bool,
    pub received_at: Option<NaiveDateTime>,
    pub note: Option<String>,
    /// Only present when the viewer may see officer notes
    pub officer_note: Option<String>,
}

/// One row of an instance's item listing.
///
/// `prio_characters` & `wishlist_characters` are `None` when the viewer may not see them, which
/// is distinct from an empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemListEntryDto {
    pub item_id: i32,
    pub name: String,
    pub quality: i32,
    pub source_name: String,
    pub guild_note: Option<String>,
    pub guild_priority: Option<String>,
    pub prio_characters: Option<Vec<CharacterLootDto>>,
    pub wishlist_characters: Option<Vec<CharacterLootDto>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemListDto {
    pub instance: InstanceDto,
    pub items: Vec<ItemListEntryDto>,
    pub raids: Vec<RaidDto>,
    pub show_officer_notes: bool,
    pub can_edit_items: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeEntryDto {
    pub item_id: i32,
    pub name: String,
    pub quality: i32,
    pub characters: Vec<CharacterLootDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDetailDto {
    pub item_id: i32,
    pub name: String,
    pub quality: i32,
    pub sources: Vec<String>,
    pub guild_note: Option<String>,
    pub guild_priority: Option<String>,
    pub prio_characters: Option<Vec<CharacterLootDto>>,
    pub wishlist_characters: Option<Vec<CharacterLootDto>>,
    pub received_characters: Vec<CharacterLootDto>,
    pub recipe_characters: Vec<CharacterLootDto>,
    pub raids: Vec<RaidDto>,
    /// Tooltip HTML, absent when the lookup failed
    pub tooltip: Option<String>,
    pub show_officer_notes: bool,
    pub can_edit_characters: bool,
    pub can_edit_items: bool,
    pub can_edit_prios: bool,
}

/// A selectable character on the loot assignment form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterOptionDto {
    pub id: i32,
    pub name: String,
    pub class: Option<String>,
    pub raid_id: Option<i32>,
    pub is_alt: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignFormDto {
    pub characters: Vec<CharacterOptionDto>,
    pub raids: Vec<RaidDto>,
    pub max_entries: usize,
    pub today: String,
}
