//! Tests for the guild page handlers.
//!
//! Handlers are called directly with their extractors. Responses are checked for status,
//! redirect target, rendered content and the flash message left in the session.

mod assignment;
mod audit_log;
mod item;
mod member;

use axum::{
    body::to_bytes,
    http::header,
    response::Response,
};
use lootledger::server::model::session::{flash::SessionFlash, user::SessionUserId};
use lootledger_test_utils::prelude::*;

async fn sign_in(test: &TestSetup, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

async fn flash(test: &TestSetup) -> Option<String> {
    SessionFlash::take(&test.session).await.unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(resp: &Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Molten Core with Ragnaros dropping Bonereaver's Edge
async fn seed_molten_core(test: &mut TestSetup) -> Result<(), TestError> {
    let instance = test
        .loot()
        .insert_instance(1, "molten-core", "Molten Core", 1)
        .await?;
    let ragnaros = test
        .loot()
        .insert_item_source(instance.id, "Ragnaros", 10)
        .await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().link_item_source(17076, ragnaros.id).await?;

    Ok(())
}
