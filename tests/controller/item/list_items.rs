use super::*;

/// Expect the instance's items with their prio characters to be rendered
#[tokio::test]
async fn renders_items_with_prios() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    let tank = test.loot().insert_character(guild.id, None, "Tankadin").await?;
    test.loot()
        .insert_character_item(tank.id, 17076, ItemListType::Prio, 1, None)
        .await?;
    sign_in(&test, member.user_id).await;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Bonereaver"));
    assert!(body.contains("Tankadin"));

    Ok(())
}

/// Expect private prios to stay hidden from members without `view.prios`
#[tokio::test]
async fn hides_private_prios() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, true, false).await?;
    let member = test.loot().insert_member(guild.id, 1, None).await?;
    seed_molten_core(&mut test).await?;
    let tank = test.loot().insert_character(guild.id, None, "Tankadin").await?;
    test.loot()
        .insert_character_item(tank.id, 17076, ItemListType::Prio, 1, None)
        .await?;
    sign_in(&test, member.user_id).await;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let body = body_text(result.unwrap().into_response()).await;
    assert!(!body.contains("Tankadin"));

    Ok(())
}

/// Expect 403 Forbidden without a user in session
#[tokio::test]
async fn forbidden_without_session_user() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, _) = test.loot().insert_guild_with_member(&[]).await?;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 Forbidden for users without a member in the guild
#[tokio::test]
async fn forbidden_for_non_member() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, _) = test.loot().insert_guild_with_member(&[]).await?;
    sign_in(&test, 99).await;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 Not Found for an instance outside the guild's expansion
#[tokio::test]
async fn not_found_for_unknown_instance() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    sign_in(&test, member.user_id).await;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "black-temple".to_string())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the guild slug in the URL to be ignored
#[tokio::test]
async fn ignores_guild_slug() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = list_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, "renamed-guild".to_string(), "molten-core".to_string())),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
