use tower_sessions::Session;

use crate::{
    model::guild::LayoutDto,
    server::{
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            guild::GuildContext,
            session::{flash::SessionFlash, user::SessionUserId},
        },
        service::guild::GuildService,
    },
};

/// Resolves the session user's membership in the guild addressed by the URL
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
/// - `guild_id`: Guild ID from the request path, the guild slug is ignored
///
/// # Returns
/// - `Ok(GuildContext)`: Guild, member & resolved permissions
/// - `Err(Error::AuthError(UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(NotGuildMember))`: User has no member in the guild
/// - `Err(Error::GuildError(GuildNotFound))`: No guild with that ID
pub async fn get_guild_context(
    state: &AppState,
    session: &Session,
    guild_id: i32,
) -> Result<GuildContext, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    GuildService::new(&state.db)
        .resolve_context(guild_id, user_id)
        .await
}

/// Page layout for the guild, consuming any pending flash message
pub async fn get_layout(
    state: &AppState,
    session: &Session,
    ctx: &GuildContext,
) -> Result<LayoutDto, Error> {
    let flash = SessionFlash::take(session).await?;

    GuildService::new(&state.db).layout(ctx, flash).await
}
