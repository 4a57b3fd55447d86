//! Tests for the member page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use lootledger::server::{controller::member::show_member, model::app::AppState};

use super::*;

/// Expect the member's characters to be listed
#[tokio::test]
async fn lists_member_characters() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    test.loot()
        .insert_character(guild.id, Some(member.id), "Mainwarrior")
        .await?;
    test.loot()
        .insert_character(guild.id, None, "Unclaimed")
        .await?;
    sign_in(&test, member.user_id).await;

    let result = show_member(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), member.id, member.slug.clone())),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(&member.username));
    assert!(body.contains("Mainwarrior"));
    assert!(!body.contains("Unclaimed"));

    Ok(())
}

/// Expect 404 Not Found for a member of another guild
#[tokio::test]
async fn not_found_for_foreign_member() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let (_other_guild, other_member) = test.loot().insert_guild_with_member(&[]).await?;
    sign_in(&test, member.user_id).await;

    let result = show_member(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((
            guild.id,
            guild.slug.clone(),
            other_member.id,
            other_member.slug.clone(),
        )),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
