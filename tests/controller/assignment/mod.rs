//! Tests for the mass loot assignment endpoints.

mod assign_loot_form;
mod submit_assign_loot;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use lootledger::server::{
    controller::assignment::{assign_loot_form, submit_assign_loot},
    model::app::AppState,
};

use super::*;
