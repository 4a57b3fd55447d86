use super::*;

/// Expect an item dropping from two bosses of the instance to be listed once
#[tokio::test]
async fn lists_multi_source_item_once() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let lucifron = test.loot().insert_item_source(instance.id, "Lucifron", 1).await?;
    let trash = test.loot().insert_item_source(instance.id, "Trash", 99).await?;
    test.loot().insert_item(16800, 1, "Arcanist Boots").await?;
    test.loot().link_item_source(16800, lucifron.id).await?;
    test.loot().link_item_source(16800, trash.id).await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let list = CatalogService::new(&test.state.db)
        .list_instance_items(&ctx, ctx.visibility(false), "molten-core")
        .await
        .unwrap();

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].source_name, "Lucifron");

    Ok(())
}

/// Expect private prios to be withheld from members without `view.prios`
#[tokio::test]
async fn hides_private_prios() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, true, false).await?;
    let member = test.loot().insert_member(guild.id, 1, None).await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let source = test.loot().insert_item_source(instance.id, "Ragnaros", 10).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().link_item_source(17076, source.id).await?;
    let character = test.loot().insert_character(guild.id, None, "Warrior").await?;
    test.loot()
        .insert_character_item(character.id, 17076, ItemListType::Prio, 1, None)
        .await?;
    test.loot()
        .insert_character_item(character.id, 17076, ItemListType::Wishlist, 1, None)
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let list = CatalogService::new(&test.state.db)
        .list_instance_items(&ctx, ctx.visibility(false), "molten-core")
        .await
        .unwrap();

    assert_eq!(list.items.len(), 1);
    assert!(list.items[0].prio_characters.is_none());
    assert_eq!(
        list.items[0].wishlist_characters.as_ref().map(|w| w.len()),
        Some(1)
    );

    Ok(())
}

/// Expect `view.prios` to reveal private prios, received rows excluded
#[tokio::test]
async fn permission_reveals_private_prios() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, true, true).await?;
    let role = test.loot().insert_role(guild.id, &["view.prios"]).await?;
    let member = test.loot().insert_member(guild.id, 1, Some(role.id)).await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let source = test.loot().insert_item_source(instance.id, "Ragnaros", 10).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().link_item_source(17076, source.id).await?;
    let first = test.loot().insert_character(guild.id, None, "First").await?;
    let second = test.loot().insert_character(guild.id, None, "Second").await?;
    let received = test
        .loot()
        .insert_character_item(first.id, 17076, ItemListType::Prio, 1, None)
        .await?;
    test.loot().mark_character_item_received(received.id).await?;
    test.loot()
        .insert_character_item(second.id, 17076, ItemListType::Prio, 2, None)
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let list = CatalogService::new(&test.state.db)
        .list_instance_items(&ctx, ctx.visibility(false), "molten-core")
        .await
        .unwrap();

    let prios = list.items[0].prio_characters.clone().unwrap_or_default();
    assert_eq!(prios.len(), 1);
    assert_eq!(prios[0].character_id, second.id);
    assert!(list.items[0].wishlist_characters.is_none());

    Ok(())
}

/// Expect the character's officer note, stripped in streamer mode
#[tokio::test]
async fn strips_officer_notes() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["view.officer-notes"])
        .await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let source = test.loot().insert_item_source(instance.id, "Ragnaros", 10).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().link_item_source(17076, source.id).await?;
    let character = test.loot().insert_character(guild.id, None, "Warrior").await?;
    let row = test
        .loot()
        .insert_character_item(character.id, 17076, ItemListType::Wishlist, 1, None)
        .await?;
    test.loot()
        .set_character_officer_note(character.id, "needs attunement")
        .await?;
    test.loot()
        .set_character_item_officer_note(row.id, "won a roll off")
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let service = CatalogService::new(&test.state.db);
    let shown = service
        .list_instance_items(&ctx, ctx.visibility(false), "molten-core")
        .await
        .unwrap();
    let streamed = service
        .list_instance_items(&ctx, ctx.visibility(true), "molten-core")
        .await
        .unwrap();

    let note = |list: &crate::model::item::ItemListDto| {
        list.items[0]
            .wishlist_characters
            .as_ref()
            .and_then(|w| w[0].officer_note.clone())
    };
    assert_eq!(note(&shown), Some("needs attunement".to_string()));
    assert_eq!(note(&streamed), None);
    assert!(!streamed.show_officer_notes);

    Ok(())
}

/// Expect items of another expansion & unknown instances to be excluded
#[tokio::test]
async fn scoped_to_guild_expansion() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let instance = test.loot().insert_instance(1, "molten-core", "Molten Core", 1).await?;
    let source = test.loot().insert_item_source(instance.id, "Ragnaros", 10).await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    test.loot().insert_item(30000, 2, "Outland Blade").await?;
    test.loot().link_item_source(17076, source.id).await?;
    test.loot().link_item_source(30000, source.id).await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let service = CatalogService::new(&test.state.db);
    let list = service
        .list_instance_items(&ctx, ctx.visibility(false), "molten-core")
        .await
        .unwrap();
    let missing = service
        .list_instance_items(&ctx, ctx.visibility(false), "karazhan")
        .await;

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].item_id, 17076);
    assert!(missing.is_err());

    Ok(())
}
