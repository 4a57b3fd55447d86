//! HTTP routing for the guild pages.
//!
//! Every page lives below `/{guild_id}/{guild_slug}`. The guild slug is cosmetic, guilds are
//! looked up by ID alone.

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /{guild_id}/{guild_slug}/items/{instance_slug}` - Item list of an instance
/// - `GET|POST /{guild_id}/{guild_slug}/items/{instance_slug}/edit` - Bulk note editor
/// - `GET /{guild_id}/{guild_slug}/recipes` - Recipes held by guild characters
/// - `GET /{guild_id}/{guild_slug}/item/{item_id}[/{item_slug}]` - Item detail
/// - `POST /{guild_id}/{guild_slug}/item/note` - Single item note update
/// - `GET|POST /{guild_id}/{guild_slug}/assign-loot` - Mass loot assignment
/// - `GET /{guild_id}/{guild_slug}/audit-log` - Audit log
/// - `GET /{guild_id}/{guild_slug}/member/{member_id}/{username_slug}` - Member page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{guild_id}/{guild_slug}/items/{instance_slug}",
            get(controller::item::list_items),
        )
        .route(
            "/{guild_id}/{guild_slug}/items/{instance_slug}/edit",
            get(controller::item::edit_items).post(controller::item::submit_item_edits),
        )
        .route(
            "/{guild_id}/{guild_slug}/recipes",
            get(controller::item::list_recipes),
        )
        .route(
            "/{guild_id}/{guild_slug}/item/note",
            post(controller::item::update_note),
        )
        .route(
            "/{guild_id}/{guild_slug}/item/{item_id}",
            get(controller::item::show_item),
        )
        .route(
            "/{guild_id}/{guild_slug}/item/{item_id}/{item_slug}",
            get(controller::item::show_item_with_slug),
        )
        .route(
            "/{guild_id}/{guild_slug}/assign-loot",
            get(controller::assignment::assign_loot_form)
                .post(controller::assignment::submit_assign_loot),
        )
        .route(
            "/{guild_id}/{guild_slug}/audit-log",
            get(controller::audit_log::audit_log),
        )
        .route(
            "/{guild_id}/{guild_slug}/member/{member_id}/{username_slug}",
            get(controller::member::show_member),
        )
}
