//! Item catalog listings annotated with guild notes and character lists.

use std::collections::{hash_map::Entry, HashMap, HashSet};

use entity::sea_orm_active_enums::ItemListType;
use sea_orm::DatabaseConnection;

use crate::{
    model::item::{CharacterLootDto, ItemDetailDto, ItemListDto, ItemListEntryDto, RecipeEntryDto},
    server::{
        data::{
            catalog::{
                guild_item::GuildItemRepository, instance::InstanceRepository, item::ItemRepository,
            },
            character::character_item::CharacterItemRepository,
            guild::raid::RaidRepository,
        },
        error::{guild::GuildError, Error},
        model::{
            db::{
                CharacterItemModel, CharacterModel, GuildItemModel, InstanceModel, ItemModel,
                ItemSourceModel,
            },
            guild::GuildContext,
            permission::Permission,
            visibility::Visibility,
        },
        service::guild::{instance_dto, raid_dto},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Items of an instance with guild notes, prio & wishlist characters.
    ///
    /// Character lists only contain unreceived rows and are `None` when hidden by `visibility`.
    ///
    /// # Returns
    /// - `Ok(ItemListDto)` - Items ordered by source order then name
    /// - `Err(Error::GuildError(InstanceNotFound))` - No instance with the slug in the guild's expansion
    /// - `Err(Error::DbErr)` - Database error
    pub async fn list_instance_items(
        &self,
        ctx: &GuildContext,
        visibility: Visibility,
        instance_slug: &str,
    ) -> Result<ItemListDto, Error> {
        let character_item_repo = CharacterItemRepository::new(self.db);

        let instance = self.find_instance(ctx, instance_slug).await?;
        let entries = self.instance_entries(ctx, &instance).await?;
        let item_ids: Vec<i32> = entries.iter().map(|(item, _, _)| item.item_id).collect();

        let mut prios = if visibility.show_prios {
            let rows = character_item_repo
                .get_for_guild(ctx.guild.id, Some(item_ids.clone()), ItemListType::Prio, true)
                .await?;
            Some(group_by_item(rows, visibility.show_officer_notes, false))
        } else {
            None
        };

        let mut wishlists = if visibility.show_wishlist {
            let rows = character_item_repo
                .get_for_guild(ctx.guild.id, Some(item_ids), ItemListType::Wishlist, true)
                .await?;
            Some(group_by_item(rows, visibility.show_officer_notes, true))
        } else {
            None
        };

        let items = entries
            .into_iter()
            .map(|(item, source, note)| {
                let item_id = item.item_id;
                let mut entry = list_entry(item, source, note);
                entry.prio_characters = prios
                    .as_mut()
                    .map(|p| p.remove(&item_id).unwrap_or_default());
                entry.wishlist_characters = wishlists
                    .as_mut()
                    .map(|w| w.remove(&item_id).unwrap_or_default());
                entry
            })
            .collect();

        let raids = RaidRepository::new(self.db).get_by_guild(ctx.guild.id).await?;

        Ok(ItemListDto {
            instance: instance_dto(instance),
            items,
            raids: raids.into_iter().map(raid_dto).collect(),
            show_officer_notes: visibility.show_officer_notes,
            can_edit_items: ctx.can(Permission::EditItems),
        })
    }

    /// Items of an instance with their guild notes only, used by the bulk note editor
    pub async fn list_instance_items_for_edit(
        &self,
        ctx: &GuildContext,
        instance_slug: &str,
    ) -> Result<ItemListDto, Error> {
        let instance = self.find_instance(ctx, instance_slug).await?;
        let entries = self.instance_entries(ctx, &instance).await?;

        Ok(ItemListDto {
            instance: instance_dto(instance),
            items: entries
                .into_iter()
                .map(|(item, source, note)| list_entry(item, source, note))
                .collect(),
            raids: Vec::new(),
            show_officer_notes: false,
            can_edit_items: ctx.can(Permission::EditItems),
        })
    }

    /// Items at least one guild character holds as a recipe, ordered by name
    pub async fn list_recipes(
        &self,
        ctx: &GuildContext,
        visibility: Visibility,
    ) -> Result<Vec<RecipeEntryDto>, Error> {
        let rows = CharacterItemRepository::new(self.db)
            .get_for_guild(ctx.guild.id, None, ItemListType::Recipe, true)
            .await?;

        let item_ids: Vec<i32> = rows
            .iter()
            .map(|(row, _)| row.item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let items = ItemRepository::new(self.db)
            .get_in_expansion(item_ids, ctx.guild.expansion_id)
            .await?;

        let mut characters = group_by_item(rows, visibility.show_officer_notes, true);

        Ok(items
            .into_iter()
            .map(|item| RecipeEntryDto {
                characters: characters.remove(&item.item_id).unwrap_or_default(),
                item_id: item.item_id,
                name: item.name,
                quality: item.quality,
            })
            .collect())
    }

    /// A single item with every character list of the guild.
    ///
    /// The tooltip is left empty, it is fetched separately by the caller.
    ///
    /// # Returns
    /// - `Ok(ItemDetailDto)` - The item with its guild data
    /// - `Err(Error::GuildError(ItemNotFound))` - Item doesn't exist in the guild's expansion
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_item_detail(
        &self,
        ctx: &GuildContext,
        visibility: Visibility,
        item_id: i32,
    ) -> Result<ItemDetailDto, Error> {
        let item_repo = ItemRepository::new(self.db);

        let item = item_repo
            .find_in_expansion(item_id, ctx.guild.expansion_id)
            .await?
            .ok_or(GuildError::ItemNotFound(item_id))?;

        let sources = item_repo.get_sources(item.item_id).await?;
        let guild_item = GuildItemRepository::new(self.db)
            .find(ctx.guild.id, item.item_id)
            .await?;

        let show_officer_notes = visibility.show_officer_notes;
        let lists = CharacterLists {
            guild_id: ctx.guild.id,
            item_id: item.item_id,
            show_officer_notes,
        };

        let prio_characters = if visibility.show_prios {
            Some(lists.get(self.db, ItemListType::Prio, false, false).await?)
        } else {
            None
        };
        let wishlist_characters = if visibility.show_wishlist {
            Some(lists.get(self.db, ItemListType::Wishlist, true, true).await?)
        } else {
            None
        };
        let mut received_characters = lists
            .get(self.db, ItemListType::Received, false, false)
            .await?;
        received_characters.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        let recipe_characters = lists
            .get(self.db, ItemListType::Recipe, false, false)
            .await?;

        let raids = RaidRepository::new(self.db).get_by_guild(ctx.guild.id).await?;
        let (guild_note, guild_priority) = split_note(guild_item);

        Ok(ItemDetailDto {
            item_id: item.item_id,
            name: item.name,
            quality: item.quality,
            sources: sources.into_iter().map(|s| s.name).collect(),
            guild_note,
            guild_priority,
            prio_characters,
            wishlist_characters,
            received_characters,
            recipe_characters,
            raids: raids.into_iter().map(raid_dto).collect(),
            tooltip: None,
            show_officer_notes,
            can_edit_characters: ctx.can(Permission::EditCharacters),
            can_edit_items: ctx.can(Permission::EditItems),
            can_edit_prios: ctx.can(Permission::EditPrios),
        })
    }

    async fn find_instance(
        &self,
        ctx: &GuildContext,
        instance_slug: &str,
    ) -> Result<InstanceModel, Error> {
        InstanceRepository::new(self.db)
            .find_by_slug(ctx.guild.expansion_id, instance_slug)
            .await?
            .ok_or_else(|| GuildError::InstanceNotFound(instance_slug.to_string()).into())
    }

    /// Deduplicated items of the instance, each with its guild note row
    async fn instance_entries(
        &self,
        ctx: &GuildContext,
        instance: &InstanceModel,
    ) -> Result<Vec<(ItemModel, ItemSourceModel, Option<GuildItemModel>)>, Error> {
        let pairs = ItemRepository::new(self.db)
            .get_sourced_by_instance(instance.id, ctx.guild.expansion_id)
            .await?;
        let entries = dedupe_by_first_source(pairs);

        let mut notes: HashMap<i32, GuildItemModel> = GuildItemRepository::new(self.db)
            .get_by_items(
                ctx.guild.id,
                entries.iter().map(|(item, _)| item.item_id).collect(),
            )
            .await?
            .into_iter()
            .map(|n| (n.item_id, n))
            .collect();

        Ok(entries
            .into_iter()
            .map(|(item, source)| {
                let note = notes.remove(&item.item_id);
                (item, source, note)
            })
            .collect())
    }
}

/// Character lists of a single item within a guild
struct CharacterLists {
    guild_id: i32,
    item_id: i32,
    show_officer_notes: bool,
}

impl CharacterLists {
    async fn get(
        &self,
        db: &DatabaseConnection,
        list_type: ItemListType,
        unreceived_only: bool,
        unique_character: bool,
    ) -> Result<Vec<CharacterLootDto>, Error> {
        let rows = CharacterItemRepository::new(db)
            .get_for_guild(
                self.guild_id,
                Some(vec![self.item_id]),
                list_type,
                unreceived_only,
            )
            .await?;

        Ok(group_by_item(rows, self.show_officer_notes, unique_character)
            .remove(&self.item_id)
            .unwrap_or_default())
    }
}

/// Keeps one entry per item using its lowest ordered source, sorted by source order then name
pub fn dedupe_by_first_source(
    pairs: Vec<(ItemModel, ItemSourceModel)>,
) -> Vec<(ItemModel, ItemSourceModel)> {
    let mut best: HashMap<i32, (ItemModel, ItemSourceModel)> = HashMap::new();

    for (item, source) in pairs {
        match best.entry(item.item_id) {
            Entry::Occupied(mut existing) => {
                let current = &existing.get().1;
                if (source.order, source.id) < (current.order, current.id) {
                    existing.insert((item, source));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((item, source));
            }
        }
    }

    let mut entries: Vec<_> = best.into_values().collect();
    entries.sort_by(|(a_item, a_source), (b_item, b_source)| {
        a_source
            .order
            .cmp(&b_source.order)
            .then_with(|| a_item.name.cmp(&b_item.name))
            .then_with(|| a_item.item_id.cmp(&b_item.item_id))
    });

    entries
}

/// Groups list rows by item, preserving row order.
///
/// With `unique_character` only the first row of each character per item is kept.
fn group_by_item(
    rows: Vec<(CharacterItemModel, CharacterModel)>,
    show_officer_notes: bool,
    unique_character: bool,
) -> HashMap<i32, Vec<CharacterLootDto>> {
    let mut seen = HashSet::new();
    let mut grouped: HashMap<i32, Vec<CharacterLootDto>> = HashMap::new();

    for (row, character) in rows {
        if unique_character && !seen.insert((row.item_id, character.id)) {
            continue;
        }

        grouped
            .entry(row.item_id)
            .or_default()
            .push(character_loot(row, character, show_officer_notes));
    }

    grouped
}

pub fn character_loot(
    row: CharacterItemModel,
    character: CharacterModel,
    show_officer_notes: bool,
) -> CharacterLootDto {
    CharacterLootDto {
        character_id: character.id,
        name: character.name,
        slug: character.slug,
        class: character.class,
        is_alt: character.is_alt,
        is_inactive: character.inactive_at.is_some(),
        raid_id: row.raid_id,
        order: row.order,
        is_offspec: row.is_offspec,
        is_received: row.is_received,
        received_at: row.received_at,
        note: row.note,
        // Character-level note, not the row's
        officer_note: character.officer_note.filter(|_| show_officer_notes),
    }
}

fn list_entry(
    item: ItemModel,
    source: ItemSourceModel,
    note: Option<GuildItemModel>,
) -> ItemListEntryDto {
    let (guild_note, guild_priority) = split_note(note);

    ItemListEntryDto {
        item_id: item.item_id,
        name: item.name,
        quality: item.quality,
        source_name: source.name,
        guild_note,
        guild_priority,
        prio_characters: None,
        wishlist_characters: None,
    }
}

fn split_note(note: Option<GuildItemModel>) -> (Option<String>, Option<String>) {
    match note {
        Some(note) => (note.note, note.priority),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests;
