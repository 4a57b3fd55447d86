//! Tests for the item list, item detail & note editing endpoints.

mod edit_items;
mod list_items;
mod list_recipes;
mod show_item;
mod submit_item_edits;
mod update_note;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use entity::sea_orm_active_enums::ItemListType;
use lootledger::server::{
    controller::item::{
        edit_items, list_items, list_recipes, show_item, show_item_with_slug, submit_item_edits,
        update_note,
    },
    model::app::AppState,
};

use super::*;
