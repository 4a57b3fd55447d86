use crate::server::{
    model::{
        db::{GuildModel, MemberModel},
        permission::{Permission, PermissionSet},
        visibility::Visibility,
    },
    util::slug::slugify,
};

/// The guild addressed by the request and the session user's membership in it
#[derive(Debug, Clone)]
pub struct GuildContext {
    pub guild: GuildModel,
    pub member: MemberModel,
    pub permissions: PermissionSet,
}

impl GuildContext {
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    pub fn visibility(&self, streamer_mode: bool) -> Visibility {
        Visibility::resolve(&self.guild, self.permissions, streamer_mode)
    }

    /// `/{guild_id}/{guild_slug}`
    pub fn guild_url(&self) -> String {
        format!("/{}/{}", self.guild.id, self.guild.slug)
    }

    pub fn member_url(&self) -> String {
        format!(
            "{}/member/{}/{}",
            self.guild_url(),
            self.member.id,
            self.member.slug
        )
    }

    /// Canonical item URL, the trailing slug is derived from the item name
    pub fn item_url(&self, item_id: i32, item_name: &str) -> String {
        format!("{}/item/{}/{}", self.guild_url(), item_id, slugify(item_name))
    }

    pub fn audit_log_url(&self) -> String {
        format!("{}/audit-log", self.guild_url())
    }
}
