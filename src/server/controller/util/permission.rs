use axum::response::Redirect;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::{guild::GuildContext, permission::Permission, session::flash::SessionFlash},
};

pub static DENIED_VIEW_MESSAGE: &str = "You don't have permissions to view that page.";
pub static DENIED_SUBMIT_MESSAGE: &str = "You don't have permissions to submit that.";
pub static DENIED_EDIT_ITEMS_MESSAGE: &str = "You don't have permissions to edit items.";

/// Returns a redirect carrying `message` as flash when the member lacks `permission`.
///
/// # Returns
/// - `Ok(None)`: Member holds the permission
/// - `Ok(Some(Redirect))`: Member lacks the permission, redirect to `redirect_to`
/// - `Err(Error::SessionError)`: Flash message could not be stored
pub async fn require_permission(
    session: &Session,
    ctx: &GuildContext,
    permission: Permission,
    message: &str,
    redirect_to: &str,
) -> Result<Option<Redirect>, Error> {
    if ctx.can(permission) {
        return Ok(None);
    }

    tracing::debug!(
        guild_id = %ctx.guild.id,
        member_id = %ctx.member.id,
        permission = permission.key(),
        "Member lacks permission"
    );

    SessionFlash::insert(session, message).await?;

    Ok(Some(Redirect::to(redirect_to)))
}
