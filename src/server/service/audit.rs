use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::AuditLogType;
use sea_orm::DatabaseConnection;

use crate::{
    model::audit::{AuditLogEntryDto, AuditLogPageDto, BatchDto},
    server::{
        data::{
            audit::{audit_log::AuditLogRepository, batch::BatchRepository},
            catalog::item::ItemRepository,
            character::character::CharacterRepository,
            guild::{member::MemberRepository, raid::RaidRepository},
        },
        error::Error,
        model::guild::GuildContext,
    },
};

pub struct AuditLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogService<'a> {
    /// Creates a new instance of [`AuditLogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Latest audit rows of the guild with the names of every referenced record.
    ///
    /// A `batch_id` from another guild yields no batch header and no rows.
    pub async fn get_page(
        &self,
        ctx: &GuildContext,
        batch_id: Option<i32>,
        character_id: Option<i32>,
    ) -> Result<AuditLogPageDto, Error> {
        let batch = match batch_id {
            Some(batch_id) => {
                BatchRepository::new(self.db)
                    .find_in_guild(ctx.guild.id, batch_id)
                    .await?
            }
            None => None,
        };

        let rows = AuditLogRepository::new(self.db)
            .get_by_guild(ctx.guild.id, batch_id, character_id)
            .await?;

        let member_ids: HashSet<i32> = rows.iter().filter_map(|r| r.member_id).collect();
        let character_ids: HashSet<i32> = rows.iter().filter_map(|r| r.character_id).collect();
        let item_ids: HashSet<i32> = rows.iter().filter_map(|r| r.item_id).collect();

        let members: HashMap<i32, String> = MemberRepository::new(self.db)
            .get_by_ids(member_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|m| (m.id, m.username))
            .collect();
        let characters: HashMap<i32, String> = CharacterRepository::new(self.db)
            .get_by_ids(character_ids.into_iter().collect())
            .await?
            .into_iter()
            .filter(|c| c.guild_id == ctx.guild.id)
            .map(|c| (c.id, c.name))
            .collect();
        let items: HashMap<i32, String> = ItemRepository::new(self.db)
            .get_in_expansion(item_ids.into_iter().collect(), ctx.guild.expansion_id)
            .await?
            .into_iter()
            .map(|i| (i.item_id, i.name))
            .collect();
        let raids: HashMap<i32, String> = RaidRepository::new(self.db)
            .get_by_guild(ctx.guild.id)
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();

        let entries = rows
            .into_iter()
            .map(|row| AuditLogEntryDto {
                id: row.id,
                description: row.description,
                log_type: row.log_type.map(log_type_label),
                member_name: row.member_id.and_then(|id| members.get(&id).cloned()),
                character_id: row.character_id,
                character_name: row.character_id.and_then(|id| characters.get(&id).cloned()),
                item_id: row.item_id,
                item_name: row.item_id.and_then(|id| items.get(&id).cloned()),
                raid_name: row.raid_id.and_then(|id| raids.get(&id).cloned()),
                batch_id: row.batch_id,
                created_at: row.created_at,
            })
            .collect();

        Ok(AuditLogPageDto {
            batch: batch.map(|b| BatchDto {
                id: b.id,
                name: b.name,
                note: b.note,
                created_at: b.created_at,
            }),
            character_id,
            entries,
        })
    }
}

fn log_type_label(log_type: AuditLogType) -> String {
    match log_type {
        AuditLogType::Assign => "assign",
        AuditLogType::ItemNote => "item note",
        AuditLogType::Wishlist => "wishlist",
        AuditLogType::Prio => "prio",
    }
    .to_string()
}
