use super::*;

/// Expect the item page with the fetched tooltip embedded
#[tokio::test]
async fn renders_item_with_tooltip() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loot_tables()
        .with_tooltip_endpoint(17076, "<b>Tooltip Marker</b>", 1)
        .build()
        .await?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = show_item_with_slug(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), 17076, "bonereavers-edge".to_string())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<b>Tooltip Marker</b>"));
    assert!(body.contains("Drops from Ragnaros"));
    test.assert_mocks();

    Ok(())
}

/// Expect the page to render without a tooltip when the lookup fails
#[tokio::test]
async fn renders_without_tooltip_on_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loot_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/tooltip/item/17076")
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = show_item(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), 17076)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Bonereaver"));
    test.assert_mocks();

    Ok(())
}

/// Expect a redirect to the canonical URL when the slug doesn't match the item name
#[tokio::test]
async fn redirects_to_canonical_slug() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = show_item_with_slug(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), 17076, "old-name".to_string())),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!("/{}/{}/item/17076/bonereavers-edge", guild.id, guild.slug)
    );

    Ok(())
}

/// Expect 404 Not Found for items of another expansion
#[tokio::test]
async fn not_found_for_other_expansion() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    test.loot().insert_item(30000, 2, "Outland Blade").await?;
    sign_in(&test, member.user_id).await;

    let result = show_item(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), 30000)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
