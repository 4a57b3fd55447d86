use super::*;

/// Expect the bulk editor to render for members with `edit.items`
#[tokio::test]
async fn renders_for_item_editors() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&["edit.items"]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = edit_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("items[0][id]"));

    Ok(())
}

/// Expect a redirect to the member page with a flash message without `edit.items`
#[tokio::test]
async fn redirects_without_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = edit_items(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!("/{}/{}/member/{}/{}", guild.id, guild.slug, member.id, member.slug)
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("You don't have permissions to view that page.")
    );

    Ok(())
}
