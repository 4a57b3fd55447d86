use chrono::Utc;

use super::*;

/// Expect the form listing active characters & raids
#[tokio::test]
async fn renders_form_with_active_characters() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    test.loot().insert_raid(guild.id, "Main Raid").await?;
    test.loot().insert_character(guild.id, None, "Tankadin").await?;
    let retired = test.loot().insert_character(guild.id, None, "Retired").await?;
    test.loot()
        .set_character_inactive(retired.id, Utc::now().naive_utc())
        .await?;
    sign_in(&test, member.user_id).await;

    let result = assign_loot_form(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Tankadin"));
    assert!(body.contains("Main Raid"));
    assert!(!body.contains("Retired"));
    assert!(body.contains("item[0][character_id]"));

    Ok(())
}

/// Expect a redirect to the member page without `edit.raid-loot`
#[tokio::test]
async fn redirects_without_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    sign_in(&test, member.user_id).await;

    let result = assign_loot_form(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!(
            "/{}/{}/member/{}/{}",
            guild.id, guild.slug, member.id, member.slug
        )
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("You don't have permissions to view that page.")
    );

    Ok(())
}

/// Expect 403 Forbidden without a signed in user
#[tokio::test]
async fn forbidden_without_session() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, _member) = test.loot().insert_guild_with_member(&[]).await?;

    let result = assign_loot_form(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
