use sea_orm::EntityTrait;

use super::*;

/// Expect rows ranked below the removed one to move up, leaving a dense ranking
#[tokio::test]
async fn renumbers_rows_below_removed() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, false, false).await?;
    let raid = test.loot().insert_raid(guild.id, "Main Raid").await?;
    test.loot().insert_item(19019, 1, "Thunderfury").await?;
    let first = test.loot().insert_character(guild.id, None, "First").await?;
    let second = test.loot().insert_character(guild.id, None, "Second").await?;
    let third = test.loot().insert_character(guild.id, None, "Third").await?;
    let removed = test
        .loot()
        .insert_character_item(first.id, 19019, ItemListType::Prio, 1, Some(raid.id))
        .await?;
    test.loot()
        .insert_character_item(second.id, 19019, ItemListType::Prio, 2, Some(raid.id))
        .await?;
    test.loot()
        .insert_character_item(third.id, 19019, ItemListType::Prio, 3, Some(raid.id))
        .await?;

    let repo = CharacterItemRepository::new(&test.state.db);
    repo.delete(removed.id).await?;
    let shifted = repo
        .close_prio_gap(
            19019,
            Some(raid.id),
            vec![first.id, second.id, third.id],
            removed.order,
        )
        .await?;

    assert_eq!(shifted, 2);
    let rows = repo
        .get_for_guild(guild.id, Some(vec![19019]), ItemListType::Prio, false)
        .await?;
    let orders: Vec<(i32, i32)> = rows.iter().map(|(r, c)| (c.id, r.order)).collect();
    assert_eq!(orders, vec![(second.id, 1), (third.id, 2)]);

    Ok(())
}

/// Expect other raids, other items & rows without a raid to be left alone
#[tokio::test]
async fn leaves_other_rankings_untouched() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, false, false).await?;
    let raid = test.loot().insert_raid(guild.id, "Main Raid").await?;
    let other_raid = test.loot().insert_raid(guild.id, "Alt Raid").await?;
    test.loot().insert_item(19019, 1, "Thunderfury").await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    let character = test.loot().insert_character(guild.id, None, "Tank").await?;
    let other_raid_row = test
        .loot()
        .insert_character_item(character.id, 19019, ItemListType::Prio, 4, Some(other_raid.id))
        .await?;
    let other_item_row = test
        .loot()
        .insert_character_item(character.id, 17076, ItemListType::Prio, 4, Some(raid.id))
        .await?;
    let no_raid_row = test
        .loot()
        .insert_character_item(character.id, 19019, ItemListType::Prio, 4, None)
        .await?;

    let shifted = CharacterItemRepository::new(&test.state.db)
        .close_prio_gap(19019, Some(raid.id), vec![character.id], 1)
        .await?;

    assert_eq!(shifted, 0);
    for row in [other_raid_row, other_item_row, no_raid_row] {
        let current = entity::prelude::CharacterItem::find_by_id(row.id)
            .one(&test.state.db)
            .await?
            .unwrap();
        assert_eq!(current.order, 4);
    }

    Ok(())
}

/// Expect a `None` raid to renumber only rows without a raid
#[tokio::test]
async fn null_raid_matches_rows_without_raid() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let guild = test.loot().insert_guild(1, false, false).await?;
    let raid = test.loot().insert_raid(guild.id, "Main Raid").await?;
    test.loot().insert_item(19019, 1, "Thunderfury").await?;
    let character = test.loot().insert_character(guild.id, None, "Tank").await?;
    let unraided = test
        .loot()
        .insert_character_item(character.id, 19019, ItemListType::Prio, 2, None)
        .await?;
    let raided = test
        .loot()
        .insert_character_item(character.id, 19019, ItemListType::Prio, 2, Some(raid.id))
        .await?;

    let shifted = CharacterItemRepository::new(&test.state.db)
        .close_prio_gap(19019, None, vec![character.id], 1)
        .await?;

    assert_eq!(shifted, 1);
    let unraided = entity::prelude::CharacterItem::find_by_id(unraided.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    let raided = entity::prelude::CharacterItem::find_by_id(raided.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(unraided.order, 1);
    assert_eq!(raided.order, 2);

    Ok(())
}
