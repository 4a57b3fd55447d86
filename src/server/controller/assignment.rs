use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{
            guild_context::{get_guild_context, get_layout},
            permission::{require_permission, DENIED_SUBMIT_MESSAGE, DENIED_VIEW_MESSAGE},
        },
        error::Error,
        model::{
            app::AppState, assignment::AssignmentRequest, permission::Permission,
            session::flash::SessionFlash,
        },
        service::assignment::AssignmentService,
        util::form::IndexedForm,
    },
    view::{
        assign_loot::{AssignLootPage, AssignLootPageProps},
        render_page,
    },
};

/// Mass loot assignment form, requires `edit.raid-loot`
///
/// # Returns
/// - `200 OK`: Rendered form with the guild's active characters & raids
/// - `303 See Other`: Member page with a flash message when lacking `edit.raid-loot`
pub async fn assign_loot_form(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug)): Path<(i32, String)>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    if let Some(redirect) = require_permission(
        &session,
        &ctx,
        Permission::EditRaidLoot,
        DENIED_VIEW_MESSAGE,
        &ctx.member_url(),
    )
    .await?
    {
        return Ok(redirect.into_response());
    }

    let form = AssignmentService::new(&state.db)
        .form_options(&ctx, Utc::now().date_naive())
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(AssignLootPage, AssignLootPageProps { layout, form }).into_response())
}

/// Records the submitted `item[i][...]` rows as received loot
///
/// # Returns
/// - `303 See Other`: Audit log filtered by the new batch, with counts & warnings as flash
/// - `303 See Other`: Member page with a flash message when lacking `edit.raid-loot`
/// - `422 Unprocessable Entity`: A field failed validation, checked ahead of the permission;
///   nothing was written
pub async fn submit_assign_loot(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug)): Path<(i32, String)>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    // Validated ahead of the permission check
    let request = AssignmentRequest::from_form(&IndexedForm::parse(pairs), Utc::now().date_naive())?;

    if let Some(redirect) = require_permission(
        &session,
        &ctx,
        Permission::EditRaidLoot,
        DENIED_SUBMIT_MESSAGE,
        &ctx.member_url(),
    )
    .await?
    {
        return Ok(redirect.into_response());
    }

    let outcome = AssignmentService::new(&state.db).assign(&ctx, request).await?;

    SessionFlash::insert(&session, outcome.flash_message()).await?;

    Ok(Redirect::to(&format!(
        "{}?batch_id={}",
        ctx.audit_log_url(),
        outcome.batch_id
    ))
    .into_response())
}
