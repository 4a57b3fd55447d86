//! Loot assignment reconciliation.
//!
//! Each accepted entry of a mass input submission becomes a received row on the character.
//! The character's matching wishlist & prio rows are then settled, either deleted or flagged
//! as received, and the whole submission is recorded under a single audit batch.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{AuditLogType, ItemListType};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::item::{AssignFormDto, CharacterOptionDto},
    server::{
        data::{
            audit::{
                audit_log::{AuditLogRepository, NewAuditLog},
                batch::{BatchRepository, NewBatch},
            },
            catalog::item::ItemRepository,
            character::{
                character::CharacterRepository,
                character_item::{CharacterItemRepository, NewReceivedItem},
            },
            guild::raid::RaidRepository,
        },
        error::{
            validation::{FieldError, ValidationError},
            Error,
        },
        model::{
            assignment::{
                AssignmentEntry, AssignmentOutcome, AssignmentRequest, MAX_ASSIGNMENT_ENTRIES,
            },
            db::{CharacterItemModel, RaidModel},
            guild::GuildContext,
        },
        service::guild::raid_dto,
        util::time::start_of_day,
    },
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

/// An entry that passed classification, bound to a guild character
struct AcceptedEntry {
    item_id: i32,
    character_id: i32,
    entry: AssignmentEntry,
}

/// Values shared by every entry of one submission
struct BatchScope<'c> {
    ctx: &'c GuildContext,
    batch_id: i32,
    raid_id: Option<i32>,
    guild_character_ids: &'c [i32],
    delete_wishlist_items: bool,
    delete_prio_items: bool,
    now: NaiveDateTime,
}

impl<'a> AssignmentService<'a> {
    /// Creates a new instance of [`AssignmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selectable active characters & raids for the mass input form
    pub async fn form_options(
        &self,
        ctx: &GuildContext,
        today: NaiveDate,
    ) -> Result<AssignFormDto, Error> {
        let characters = CharacterRepository::new(self.db)
            .get_by_guild(ctx.guild.id)
            .await?
            .into_iter()
            .filter(|c| c.inactive_at.is_none())
            .map(|c| CharacterOptionDto {
                id: c.id,
                name: c.name,
                class: c.class,
                raid_id: c.raid_id,
                is_alt: c.is_alt,
            })
            .collect();

        let raids = RaidRepository::new(self.db).get_by_guild(ctx.guild.id).await?;

        Ok(AssignFormDto {
            characters,
            raids: raids.into_iter().map(raid_dto).collect(),
            max_entries: MAX_ASSIGNMENT_ENTRIES,
            today: today.format("%Y-%m-%d").to_string(),
        })
    }

    /// Records a mass loot assignment.
    ///
    /// References are validated before anything is written. Entries without an item are
    /// skipped, entries without a known guild character are counted as failures with a
    /// warning. Everything else, batch included, is written in one transaction.
    ///
    /// # Returns
    /// - `Ok(AssignmentOutcome)` - Counts, warnings & the batch the rows were recorded under
    /// - `Err(Error::ValidationError)` - Raid isn't part of the guild or an item isn't part of the
    ///   guild's expansion
    /// - `Err(Error::DbErr)` - Database error, the transaction was rolled back
    pub async fn assign(
        &self,
        ctx: &GuildContext,
        request: AssignmentRequest,
    ) -> Result<AssignmentOutcome, Error> {
        let raid = self.validate_references(ctx, &request).await?;

        let guild_character_ids: Vec<i32> = CharacterRepository::new(self.db)
            .get_by_guild(ctx.guild.id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let (accepted, warnings) = classify(
            request.entries,
            &guild_character_ids.iter().copied().collect(),
            request.skip_missing_characters,
        );

        let raid_id = raid.as_ref().map(|r| r.id);
        let raid_suffix = raid
            .as_ref()
            .map(|r| format!(" on raid {}", r.name))
            .unwrap_or_default();

        let txn = self.db.begin().await?;

        let batch = BatchRepository::new(&txn)
            .create(NewBatch {
                guild_id: ctx.guild.id,
                member_id: ctx.member.id,
                user_id: Some(ctx.member.user_id),
                raid_id,
                name: request.name,
                note: format!(
                    "{} assigned {} items{}",
                    ctx.member.username,
                    accepted.len(),
                    raid_suffix
                ),
                batch_type: AuditLogType::Assign,
            })
            .await?;

        let scope = BatchScope {
            ctx,
            batch_id: batch.id,
            raid_id,
            guild_character_ids: &guild_character_ids,
            delete_wishlist_items: request.delete_wishlist_items,
            delete_prio_items: request.delete_prio_items,
            now: Utc::now().naive_utc(),
        };

        for accepted_entry in &accepted {
            assign_entry(&txn, &scope, accepted_entry).await?;
        }

        txn.commit().await?;

        tracing::info!(
            guild_id = %ctx.guild.id,
            batch_id = %batch.id,
            added = accepted.len(),
            failed = warnings.len(),
            "Recorded loot assignment"
        );

        Ok(AssignmentOutcome {
            added: accepted.len(),
            failed: warnings.len(),
            warnings,
            batch_id: batch.id,
        })
    }

    /// Checks the raid belongs to the guild & every item belongs to the guild's expansion
    async fn validate_references(
        &self,
        ctx: &GuildContext,
        request: &AssignmentRequest,
    ) -> Result<Option<RaidModel>, Error> {
        let mut errors = Vec::new();

        let raid = match request.raid_id {
            Some(raid_id) => {
                let raid = RaidRepository::new(self.db)
                    .find_in_guild(ctx.guild.id, raid_id)
                    .await?;
                if raid.is_none() {
                    errors.push(FieldError::new("raid_id", "raid doesn't belong to this guild"));
                }
                raid
            }
            None => None,
        };

        let known_items: HashSet<i32> = ItemRepository::new(self.db)
            .get_in_expansion(request.item_ids(), ctx.guild.expansion_id)
            .await?
            .into_iter()
            .map(|i| i.item_id)
            .collect();

        for entry in &request.entries {
            if let Some(item_id) = entry.item_id {
                if !known_items.contains(&item_id) {
                    errors.push(FieldError::new(
                        format!("item.{}.id", entry.index),
                        format!("item ID {} doesn't exist for this expansion", item_id),
                    ));
                }
            }
        }

        ValidationError::check(errors)?;

        Ok(raid)
    }
}

/// Splits entries into accepted ones & failure warnings, entries without an item are dropped
fn classify(
    entries: Vec<AssignmentEntry>,
    guild_character_ids: &HashSet<i32>,
    skip_missing_characters: bool,
) -> (Vec<AcceptedEntry>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries {
        let Some(item_id) = entry.item_id else {
            continue;
        };

        match entry.character_id {
            None if skip_missing_characters => {}
            None => warnings.push(format!("{} to missing character", entry.display_label())),
            Some(character_id) if !guild_character_ids.contains(&character_id) => {
                warnings.push(format!(
                    "{} to character ID {}",
                    entry.display_label(),
                    character_id
                ));
            }
            Some(character_id) => accepted.push(AcceptedEntry {
                item_id,
                character_id,
                entry,
            }),
        }
    }

    (accepted, warnings)
}

/// Inserts the received row then settles the character's wishlist & prio for the item
async fn assign_entry<C: ConnectionTrait>(
    db: &C,
    scope: &BatchScope<'_>,
    accepted: &AcceptedEntry,
) -> Result<(), Error> {
    let character_item_repo = CharacterItemRepository::new(db);
    let audit_repo = AuditLogRepository::new(db);
    let entry = &accepted.entry;

    character_item_repo
        .create_received(NewReceivedItem {
            character_id: accepted.character_id,
            item_id: accepted.item_id,
            added_by: scope.ctx.member.id,
            raid_id: scope.raid_id,
            batch_id: scope.batch_id,
            is_offspec: entry.is_offspec,
            received_at: entry.received_at.map(start_of_day).unwrap_or(scope.now),
            note: entry.note.clone(),
            officer_note: entry.officer_note.clone(),
            import_id: entry.import_id.clone(),
        })
        .await?;

    let mut description = format!("{} assigned item to character", scope.ctx.member.username);
    if entry.is_offspec {
        description.push_str(" (OS)");
    }
    if let Some(received_at) = entry.received_at {
        description.push_str(&format!(" (backdated {})", received_at.format("%Y-%m-%d")));
    }

    audit_repo
        .create(NewAuditLog {
            guild_id: scope.ctx.guild.id,
            member_id: Some(scope.ctx.member.id),
            description,
            log_type: Some(AuditLogType::Assign),
            character_id: Some(accepted.character_id),
            item_id: Some(accepted.item_id),
            raid_id: scope.raid_id,
            batch_id: Some(scope.batch_id),
        })
        .await?;

    if let Some(row) = character_item_repo
        .find_best_match(
            accepted.character_id,
            accepted.item_id,
            ItemListType::Wishlist,
            scope.delete_wishlist_items,
        )
        .await?
    {
        let description = if scope.delete_wishlist_items {
            character_item_repo.delete(row.id).await?;
            "System removed 1 wishlist item after character was assigned item"
        } else {
            character_item_repo
                .mark_received(row.clone(), scope.now)
                .await?;
            "System flagged 1 wishlist item as received after character was assigned item"
        };

        audit_settled_row(db, scope, &row, AuditLogType::Wishlist, description).await?;
    }

    if let Some(row) = character_item_repo
        .find_best_match(
            accepted.character_id,
            accepted.item_id,
            ItemListType::Prio,
            scope.delete_prio_items,
        )
        .await?
    {
        let description = if scope.delete_prio_items {
            character_item_repo.delete(row.id).await?;
            character_item_repo
                .close_prio_gap(
                    row.item_id,
                    row.raid_id,
                    scope.guild_character_ids.to_vec(),
                    row.order,
                )
                .await?;
            "System removed 1 prio after character was assigned item"
        } else {
            character_item_repo
                .mark_received(row.clone(), scope.now)
                .await?;
            "System flagged 1 prio as received after character was assigned item"
        };

        audit_settled_row(db, scope, &row, AuditLogType::Prio, description).await?;
    }

    Ok(())
}

async fn audit_settled_row<C: ConnectionTrait>(
    db: &C,
    scope: &BatchScope<'_>,
    row: &CharacterItemModel,
    log_type: AuditLogType,
    description: &str,
) -> Result<(), Error> {
    AuditLogRepository::new(db)
        .create(NewAuditLog {
            guild_id: scope.ctx.guild.id,
            member_id: Some(scope.ctx.member.id),
            description: description.to_string(),
            log_type: Some(log_type),
            character_id: Some(row.character_id),
            item_id: Some(row.item_id),
            raid_id: row.raid_id,
            batch_id: Some(scope.batch_id),
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests;
