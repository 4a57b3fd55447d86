use super::*;

/// Expect recipes held by guild characters with their holders
#[tokio::test]
async fn renders_recipe_holders() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    test.loot()
        .insert_item(18252, 1, "Pattern: Core Armor Kit")
        .await?;
    let crafter = test.loot().insert_character(guild.id, None, "Crafter").await?;
    test.loot()
        .insert_character_item(crafter.id, 18252, ItemListType::Recipe, 0, None)
        .await?;
    sign_in(&test, member.user_id).await;

    let result = list_recipes(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Pattern: Core Armor Kit"));
    assert!(body.contains("Crafter"));

    Ok(())
}
