use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::guild::{GuildDto, InstanceDto, LayoutDto, RaidDto},
    server::{
        data::{
            catalog::instance::InstanceRepository,
            guild::{guild::GuildRepository, member::MemberRepository},
        },
        error::{auth::AuthError, guild::GuildError, Error},
        model::{
            db::{InstanceModel, RaidModel},
            guild::GuildContext,
            permission::PermissionSet,
        },
    },
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    /// Creates a new instance of [`GuildService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the session user into a member of the guild along with the member's permissions.
    ///
    /// # Returns
    /// - `Ok(GuildContext)` - User is a member of the guild
    /// - `Err(Error::GuildError(GuildNotFound))` - No guild exists with the provided ID
    /// - `Err(Error::AuthError(NotGuildMember))` - User is not a member of the guild
    /// - `Err(Error::DbErr)` - Database error
    pub async fn resolve_context(&self, guild_id: i32, user_id: i32) -> Result<GuildContext, Error> {
        let guild = GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .ok_or(GuildError::GuildNotFound(guild_id))?;

        let Some((member, role)) = MemberRepository::new(self.db)
            .find_by_user_id(guild.id, user_id)
            .await?
        else {
            return Err(AuthError::NotGuildMember { guild_id, user_id }.into());
        };

        let permissions = role
            .map(|role| PermissionSet::from_role_permissions(&role.permissions))
            .unwrap_or_else(PermissionSet::empty);

        tracing::trace!(guild_id = %guild.id, member_id = %member.id, "Resolved guild member");

        Ok(GuildContext {
            guild,
            member,
            permissions,
        })
    }

    /// Data shared by every guild page
    pub async fn layout(&self, ctx: &GuildContext, flash: Option<String>) -> Result<LayoutDto, Error> {
        let instances = InstanceRepository::new(self.db)
            .get_by_expansion(ctx.guild.expansion_id)
            .await?;

        Ok(LayoutDto {
            guild: GuildDto {
                id: ctx.guild.id,
                name: ctx.guild.name.clone(),
                slug: ctx.guild.slug.clone(),
                expansion_id: ctx.guild.expansion_id,
            },
            instances: instances.into_iter().map(instance_dto).collect(),
            member_name: ctx.member.username.clone(),
            member_url: ctx.member_url(),
            flash,
        })
    }
}

pub fn instance_dto(instance: InstanceModel) -> InstanceDto {
    InstanceDto {
        id: instance.id,
        name: instance.name,
        slug: instance.slug,
    }
}

pub fn raid_dto(raid: RaidModel) -> RaidDto {
    RaidDto {
        id: raid.id,
        name: raid.name,
        color: raid.color,
    }
}
