use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{
            guild_context::{get_guild_context, get_layout},
            permission::{
                require_permission, DENIED_EDIT_ITEMS_MESSAGE, DENIED_SUBMIT_MESSAGE,
                DENIED_VIEW_MESSAGE,
            },
        },
        data::catalog::item::ItemRepository,
        error::{
            validation::{FieldError, ValidationError},
            Error,
        },
        model::{
            app::AppState, guild::GuildContext, note::NoteEdit, permission::Permission,
            session::flash::SessionFlash,
        },
        service::{catalog::CatalogService, note::NoteService, tooltip::TooltipService},
        util::{form::IndexedForm, slug::slugify},
    },
    view::{
        item_detail::{ItemDetailPage, ItemDetailPageProps},
        item_edit::{ItemEditPage, ItemEditPageProps},
        item_list::{ItemListPage, ItemListPageProps},
        recipe_list::{RecipeListPage, RecipeListPageProps},
        render_page,
    },
};

/// Item list of an instance with guild notes, prios & wishlists
///
/// # Returns
/// - `200 OK`: Rendered item list
/// - `403 Forbidden`: Not logged in or not a member of the guild
/// - `404 Not Found`: Unknown guild or instance
pub async fn list_items(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, instance_slug)): Path<(i32, String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;
    let visibility = ctx.visibility(state.streamer_mode);

    let list = CatalogService::new(&state.db)
        .list_instance_items(&ctx, visibility, &instance_slug)
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(ItemListPage, ItemListPageProps { layout, list }))
}

/// Bulk note & priority editor for an instance, requires `edit.items`
pub async fn edit_items(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, instance_slug)): Path<(i32, String, String)>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    if let Some(redirect) = require_permission(
        &session,
        &ctx,
        Permission::EditItems,
        DENIED_VIEW_MESSAGE,
        &ctx.member_url(),
    )
    .await?
    {
        return Ok(redirect.into_response());
    }

    let list = CatalogService::new(&state.db)
        .list_instance_items_for_edit(&ctx, &instance_slug)
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(ItemEditPage, ItemEditPageProps { layout, list }).into_response())
}

/// Applies the bulk editor's `items[i][id|note|priority]` rows
///
/// # Returns
/// - `303 See Other`: Back to the instance's item list with a flash message, or to the member
///   page when lacking `edit.items`
/// - `422 Unprocessable Entity`: A row failed validation, nothing was written
pub async fn submit_item_edits(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, instance_slug)): Path<(i32, String, String)>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    if let Some(redirect) = require_permission(
        &session,
        &ctx,
        Permission::EditItems,
        DENIED_SUBMIT_MESSAGE,
        &ctx.member_url(),
    )
    .await?
    {
        return Ok(redirect.into_response());
    }

    let catalog_service = CatalogService::new(&state.db);
    // Resolves the instance first so an unknown slug is a 404 rather than a silent no-op
    let list = catalog_service
        .list_instance_items_for_edit(&ctx, &instance_slug)
        .await?;

    let edits = NoteEdit::many_from_form(&IndexedForm::parse(pairs))?;
    let saved = NoteService::new(&state.db).save_notes(&ctx, edits).await?;

    SessionFlash::insert(&session, saved.flash_message()).await?;

    Ok(Redirect::to(&format!(
        "{}/items/{}",
        ctx.guild_url(),
        list.instance.slug
    ))
    .into_response())
}

/// Items held as recipes by the guild's characters
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;
    let visibility = ctx.visibility(state.streamer_mode);

    let recipes = CatalogService::new(&state.db)
        .list_recipes(&ctx, visibility)
        .await?;
    let layout = get_layout(&state, &session, &ctx).await?;

    Ok(render_page(
        RecipeListPage,
        RecipeListPageProps { layout, recipes },
    ))
}

/// Item detail addressed by ID alone
pub async fn show_item(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, item_id)): Path<(i32, String, i32)>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    render_item_detail(&state, &session, &ctx, item_id, None).await
}

/// Item detail, redirecting to the canonical URL when `item_slug` doesn't match the item's name
///
/// # Returns
/// - `200 OK`: Rendered item detail
/// - `303 See Other`: Slug didn't match, redirect to the canonical item URL
/// - `404 Not Found`: Item isn't part of the guild's expansion
pub async fn show_item_with_slug(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug, item_id, item_slug)): Path<(i32, String, i32, String)>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    render_item_detail(&state, &session, &ctx, item_id, Some(&item_slug)).await
}

async fn render_item_detail(
    state: &AppState,
    session: &Session,
    ctx: &GuildContext,
    item_id: i32,
    item_slug: Option<&str>,
) -> Result<Response, Error> {
    let visibility = ctx.visibility(state.streamer_mode);

    let mut item = CatalogService::new(&state.db)
        .get_item_detail(ctx, visibility, item_id)
        .await?;

    if let Some(item_slug) = item_slug {
        if item_slug != slugify(&item.name) {
            return Ok(Redirect::to(&ctx.item_url(item.item_id, &item.name)).into_response());
        }
    }

    item.tooltip = TooltipService::new(&state.http_client, &state.tooltip)
        .fetch(item.item_id, ctx.guild.expansion_id)
        .await;

    let layout = get_layout(state, session, ctx).await?;

    Ok(render_page(ItemDetailPage, ItemDetailPageProps { layout, item }).into_response())
}

/// Saves the note & priority of a single item from the item detail page
///
/// # Returns
/// - `303 See Other`: Back to the item page, with a success flash or a permission flash when
///   lacking `edit.items`
/// - `422 Unprocessable Entity`: Invalid fields or an item outside the guild's expansion
pub async fn update_note(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, _guild_slug)): Path<(i32, String)>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, Error> {
    let ctx = get_guild_context(&state, &session, guild_id).await?;

    let edit = NoteEdit::from_form(&IndexedForm::parse(pairs))?;

    let Some(item) = ItemRepository::new(&state.db)
        .find_in_expansion(edit.item_id, ctx.guild.expansion_id)
        .await?
    else {
        return Err(ValidationError::InvalidFields(vec![FieldError::new(
            "id",
            format!("item ID {} doesn't exist for this expansion", edit.item_id),
        )])
        .into());
    };

    let item_url = ctx.item_url(item.item_id, &item.name);

    if let Some(redirect) = require_permission(
        &session,
        &ctx,
        Permission::EditItems,
        DENIED_EDIT_ITEMS_MESSAGE,
        &item_url,
    )
    .await?
    {
        return Ok(redirect.into_response());
    }

    let saved = NoteService::new(&state.db).save_note(&ctx, edit).await?;

    SessionFlash::insert(&session, saved.flash_message()).await?;

    Ok(Redirect::to(&item_url).into_response())
}
