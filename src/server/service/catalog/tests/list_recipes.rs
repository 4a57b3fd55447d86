use super::*;

/// Expect recipe items held by guild characters, sorted by name
#[tokio::test]
async fn lists_guild_recipes_by_name() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    let other_guild = test.loot().insert_guild(1, false, false).await?;
    test.loot().insert_item(18259, 1, "Formula: Enchant Weapon - Spell Power").await?;
    test.loot().insert_item(18252, 1, "Pattern: Core Armor Kit").await?;
    test.loot().insert_item(18290, 1, "Schematic: Biznicks").await?;
    let crafter = test.loot().insert_character(guild.id, None, "Crafter").await?;
    let outsider = test.loot().insert_character(other_guild.id, None, "Outsider").await?;
    test.loot()
        .insert_character_item(crafter.id, 18252, ItemListType::Recipe, 0, None)
        .await?;
    test.loot()
        .insert_character_item(crafter.id, 18259, ItemListType::Recipe, 0, None)
        .await?;
    test.loot()
        .insert_character_item(outsider.id, 18290, ItemListType::Recipe, 0, None)
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let recipes = CatalogService::new(&test.state.db)
        .list_recipes(&ctx, ctx.visibility(false))
        .await
        .unwrap();

    let ids: Vec<i32> = recipes.iter().map(|r| r.item_id).collect();
    assert_eq!(ids, vec![18259, 18252]);
    assert_eq!(recipes[0].characters[0].character_id, crafter.id);

    Ok(())
}
