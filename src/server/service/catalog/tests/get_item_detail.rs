use super::*;

/// Expect one wishlist entry per character & every list populated
#[tokio::test]
async fn collects_character_lists() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.items"])
        .await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let source = test.loot().insert_item_source(instance.id, "Ragnaros", 10).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().link_item_source(17076, source.id).await?;
    test.loot()
        .insert_guild_item(guild.id, 17076, Some("Fury warriors"), Some("Tanks > DPS"))
        .await?;
    let warrior = test.loot().insert_character(guild.id, None, "Warrior").await?;
    let rogue = test.loot().insert_character(guild.id, None, "Rogue").await?;
    test.loot()
        .insert_character_item(warrior.id, 17076, ItemListType::Wishlist, 1, None)
        .await?;
    test.loot()
        .insert_character_item(warrior.id, 17076, ItemListType::Wishlist, 2, None)
        .await?;
    test.loot()
        .insert_character_item(rogue.id, 17076, ItemListType::Received, 0, None)
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let detail = CatalogService::new(&test.state.db)
        .get_item_detail(&ctx, ctx.visibility(false), 17076)
        .await
        .unwrap();

    assert_eq!(detail.sources, vec!["Ragnaros".to_string()]);
    assert_eq!(detail.guild_note.as_deref(), Some("Fury warriors"));
    assert_eq!(detail.guild_priority.as_deref(), Some("Tanks > DPS"));
    assert_eq!(detail.wishlist_characters.map(|w| w.len()), Some(1));
    assert_eq!(detail.prio_characters.map(|p| p.len()), Some(0));
    assert_eq!(detail.received_characters.len(), 1);
    assert!(detail.can_edit_items);
    assert!(!detail.can_edit_prios);
    assert!(detail.tooltip.is_none());

    Ok(())
}

/// Expect a missing guild note to leave note & priority empty
#[tokio::test]
async fn absent_note_is_none() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let detail = CatalogService::new(&test.state.db)
        .get_item_detail(&ctx, ctx.visibility(false), 17076)
        .await
        .unwrap();

    assert!(detail.guild_note.is_none());
    assert!(detail.guild_priority.is_none());
    assert!(detail.sources.is_empty());

    Ok(())
}

/// Expect items outside the guild's expansion to be not found
#[tokio::test]
async fn rejects_other_expansion() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    test.loot().insert_item(30000, 2, "Outland Blade").await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let result = CatalogService::new(&test.state.db)
        .get_item_detail(&ctx, ctx.visibility(false), 30000)
        .await;

    assert!(matches!(
        result,
        Err(crate::server::error::Error::GuildError(
            crate::server::error::guild::GuildError::ItemNotFound(30000)
        ))
    ));

    Ok(())
}
