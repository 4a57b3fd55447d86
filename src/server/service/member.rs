use sea_orm::DatabaseConnection;

use crate::{
    model::member::{MemberCharacterDto, MemberPageDto},
    server::{
        data::{character::character::CharacterRepository, guild::member::MemberRepository},
        error::{guild::GuildError, Error},
        model::guild::GuildContext,
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// A guild member and their characters, active characters first.
    ///
    /// Officer notes are only included when `show_officer_notes` is set.
    pub async fn get_page(
        &self,
        ctx: &GuildContext,
        member_id: i32,
        show_officer_notes: bool,
    ) -> Result<MemberPageDto, Error> {
        let member = MemberRepository::new(self.db)
            .find_in_guild(ctx.guild.id, member_id)
            .await?
            .ok_or(GuildError::MemberNotFound(member_id))?;

        let mut characters: Vec<MemberCharacterDto> = CharacterRepository::new(self.db)
            .get_by_member(ctx.guild.id, member.id)
            .await?
            .into_iter()
            .map(|(character, raid)| MemberCharacterDto {
                id: character.id,
                name: character.name,
                slug: character.slug,
                level: character.level,
                race: character.race,
                class: character.class,
                spec: character.spec,
                is_alt: character.is_alt,
                is_inactive: character.inactive_at.is_some(),
                raid_name: raid.map(|r| r.name),
                public_note: character.public_note,
                officer_note: character.officer_note.filter(|_| show_officer_notes),
            })
            .collect();
        // Stable, keeps name order within each group
        characters.sort_by_key(|c| c.is_inactive);

        Ok(MemberPageDto {
            member_id: member.id,
            username: member.username,
            characters,
        })
    }
}
