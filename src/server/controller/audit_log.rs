use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::guild_context::{get_guild_context, get_layout},
        error::Error,
        model::app::AppState,
        service::audit::AuditLogService,
    },
    view::{
        audit_log::{AuditLogPage, AuditLogPageProps},
        render_page,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct AuditLogQuery {
    pub batch_id: Option<i32>,
    pub character_id: Option<i32>,
}

/// Latest audit rows of the guild, optionally narrowed to a batch and/or character
pub async fn audit_log(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug)): Path<(i32, String)>,
    Query(query): Query<AuditLogQuery>,
) -> Result<impl IntoResponse, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    let page = AuditLogService::new(&state.db)
        .get_page(&ctx, query.batch_id, query.character_id)
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(AuditLogPage, AuditLogPageProps { layout, page }))
}
