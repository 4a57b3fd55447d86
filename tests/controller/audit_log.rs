//! Tests for the audit log page.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use lootledger::server::{
    controller::audit_log::{audit_log, AuditLogQuery},
    model::app::AppState,
};
use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Expect every row of the guild, newest first
#[tokio::test]
async fn lists_guild_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let other_guild = test.loot().insert_guild(1, false, false).await?;
    test.loot()
        .insert_audit_log(guild.id, "Officer1 changed the note", None)
        .await?;
    test.loot()
        .insert_audit_log(other_guild.id, "Someone else's change", None)
        .await?;
    sign_in(&test, member.user_id).await;

    let result = audit_log(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Query(AuditLogQuery::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Officer1 changed the note"));
    assert!(!body.contains("Someone else"));
    assert!(!body.contains("Show all"));

    Ok(())
}

/// Expect a batch filter to show the batch header & only its rows
#[tokio::test]
async fn filters_by_batch() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let batch = test.loot().insert_batch(guild.id, member.id).await?;
    let in_batch = test
        .loot()
        .insert_audit_log(guild.id, "Assigned in batch", None)
        .await?;
    test.loot()
        .insert_audit_log(guild.id, "Unrelated change", None)
        .await?;
    entity::audit_log::ActiveModel {
        id: ActiveValue::Unchanged(in_batch.id),
        batch_id: ActiveValue::Set(Some(batch.id)),
        ..Default::default()
    }
    .update(&test.state.db)
    .await?;
    sign_in(&test, member.user_id).await;

    let result = audit_log(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Query(AuditLogQuery {
            batch_id: Some(batch.id),
            character_id: None,
        }),
    )
    .await;

    let body = body_text(result.unwrap().into_response()).await;
    assert!(body.contains("Mock batch"));
    assert!(body.contains("Assigned in batch"));
    assert!(!body.contains("Unrelated change"));
    assert!(body.contains("Show all"));

    Ok(())
}
