use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::guild_context::{get_guild_context, get_layout},
        error::Error,
        model::app::AppState,
        service::member::MemberService,
    },
    view::{
        member::{MemberPage, MemberPageProps},
        render_page,
    },
};

/// A guild member with their characters, the username slug is cosmetic
pub async fn show_member(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, member_id, _username_slug)): Path<(i32, String, i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;
    let visibility = ctx.visibility(state.streamer_mode);

    let member = MemberService::new(&state.db)
        .get_page(&ctx, member_id, visibility.show_officer_notes)
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(MemberPage, MemberPageProps { layout, member }))
}
