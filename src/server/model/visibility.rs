use crate::server::model::{
    db::GuildModel,
    permission::{Permission, PermissionSet},
};

/// Which character data the current member may see, resolved once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub show_prios: bool,
    pub show_wishlist: bool,
    pub show_officer_notes: bool,
}

impl Visibility {
    /// Private lists are shown only to members holding the matching view permission. Officer
    /// notes additionally require streamer mode to be off.
    pub fn resolve(guild: &GuildModel, permissions: PermissionSet, streamer_mode: bool) -> Self {
        Self {
            show_prios: !guild.is_prio_private || permissions.contains(Permission::ViewPrios),
            show_wishlist: !guild.is_wishlist_private
                || permissions.contains(Permission::ViewWishlists),
            show_officer_notes: permissions.contains(Permission::ViewOfficerNotes)
                && !streamer_mode,
        }
    }
}
