//! Guild note & priority editing for items.

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::AuditLogType;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        audit::audit_log::{AuditLogRepository, NewAuditLog},
        catalog::{guild_item::GuildItemRepository, item::ItemRepository},
    },
    error::{
        validation::{FieldError, ValidationError},
        Error,
    },
    model::{
        db::{GuildItemModel, ItemModel},
        guild::GuildContext,
        note::NoteEdit,
    },
};

/// Result of saving a single item's note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSaved {
    pub created: bool,
    pub item: ItemModel,
}

impl NoteSaved {
    pub fn flash_message(&self) -> String {
        let action = if self.created { "created" } else { "updated" };
        format!("Successfully {} {}'s note.", action, self.item.name)
    }
}

/// Result of a bulk note submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotesSaved {
    pub added: usize,
    pub updated: usize,
}

impl NotesSaved {
    pub fn flash_message(&self) -> String {
        format!(
            "Successfully updated notes. {} added, {} updated.",
            self.added, self.updated
        )
    }
}

pub struct NoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteService<'a> {
    /// Creates a new instance of [`NoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the guild's note & priority for one item.
    ///
    /// An audit row is written on every call, even when the values didn't change.
    ///
    /// # Returns
    /// - `Ok(NoteSaved)` - Whether the row was created along with the item
    /// - `Err(Error::ValidationError)` - Item doesn't exist in the guild's expansion
    /// - `Err(Error::DbErr)` - Database error, nothing was written
    pub async fn save_note(&self, ctx: &GuildContext, edit: NoteEdit) -> Result<NoteSaved, Error> {
        let item = ItemRepository::new(self.db)
            .find_in_expansion(edit.item_id, ctx.guild.expansion_id)
            .await?
            .ok_or_else(|| {
                ValidationError::InvalidFields(vec![FieldError::new(
                    "id",
                    format!("item ID {} doesn't exist for this expansion", edit.item_id),
                )])
            })?;

        let existing = GuildItemRepository::new(self.db)
            .find(ctx.guild.id, item.item_id)
            .await?;

        let txn = self.db.begin().await?;
        let created = existing.is_none();
        write_note(&txn, ctx, existing, edit).await?;
        txn.commit().await?;

        tracing::debug!(guild_id = %ctx.guild.id, item_id = %item.item_id, created, "Saved item note");

        Ok(NoteSaved { created, item })
    }

    /// Applies the bulk editor's rows in a single transaction.
    ///
    /// Rows whose note & priority match the stored row are skipped, as are blank rows for items
    /// without a stored row.
    pub async fn save_notes(
        &self,
        ctx: &GuildContext,
        edits: Vec<NoteEdit>,
    ) -> Result<NotesSaved, Error> {
        let item_ids: Vec<i32> = edits.iter().map(|e| e.item_id).collect();

        let known: Vec<i32> = ItemRepository::new(self.db)
            .get_in_expansion(item_ids.clone(), ctx.guild.expansion_id)
            .await?
            .into_iter()
            .map(|i| i.item_id)
            .collect();
        ValidationError::check(
            edits
                .iter()
                .filter(|e| !known.contains(&e.item_id))
                .map(|e| {
                    FieldError::new(
                        "items",
                        format!("item ID {} doesn't exist for this expansion", e.item_id),
                    )
                })
                .collect(),
        )?;

        let mut existing: HashMap<i32, GuildItemModel> = GuildItemRepository::new(self.db)
            .get_by_items(ctx.guild.id, item_ids)
            .await?
            .into_iter()
            .map(|n| (n.item_id, n))
            .collect();

        let mut saved = NotesSaved::default();
        let txn = self.db.begin().await?;

        for edit in edits {
            let row = match existing.remove(&edit.item_id) {
                Some(current) if current.note == edit.note && current.priority == edit.priority => {
                    current
                }
                Some(current) => {
                    saved.updated += 1;
                    write_note(&txn, ctx, Some(current), edit).await?
                }
                None if edit.is_blank() => continue,
                None => {
                    saved.added += 1;
                    write_note(&txn, ctx, None, edit).await?
                }
            };
            existing.insert(row.item_id, row);
        }

        txn.commit().await?;

        tracing::debug!(
            guild_id = %ctx.guild.id,
            added = saved.added,
            updated = saved.updated,
            "Saved bulk item notes"
        );

        Ok(saved)
    }
}

/// Creates or updates the note row and records the matching audit entry
async fn write_note<C: ConnectionTrait>(
    db: &C,
    ctx: &GuildContext,
    existing: Option<GuildItemModel>,
    edit: NoteEdit,
) -> Result<GuildItemModel, Error> {
    let guild_item_repo = GuildItemRepository::new(db);

    let (guild_item, action) = match existing {
        Some(current) => (
            guild_item_repo
                .update(current, edit.note, edit.priority, ctx.member.id)
                .await?,
            "changed",
        ),
        None => (
            guild_item_repo
                .create(
                    ctx.guild.id,
                    edit.item_id,
                    edit.note,
                    edit.priority,
                    ctx.member.id,
                )
                .await?,
            "added",
        ),
    };

    AuditLogRepository::new(db)
        .create(NewAuditLog {
            guild_id: ctx.guild.id,
            member_id: Some(ctx.member.id),
            description: format!("{} {} item note/priority", ctx.member.username, action),
            log_type: Some(AuditLogType::ItemNote),
            item_id: Some(guild_item.item_id),
            ..Default::default()
        })
        .await?;

    Ok(guild_item)
}

#[cfg(test)]
mod tests;
