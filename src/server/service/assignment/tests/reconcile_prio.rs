use super::*;

/// Expect deleting the order 2 prio to leave a dense 1, 2 ranking & other items untouched
#[tokio::test]
async fn delete_renumbers_remaining_prios() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    let raid = test.loot().insert_raid(guild.id, "Main Raid").await?;
    test.loot().insert_item(19019, 1, "Thunderfury").await?;
    test.loot().insert_item(17076, 1, "Bonereaver's Edge").await?;
    let first = test.loot().insert_character(guild.id, None, "First").await?;
    let second = test.loot().insert_character(guild.id, None, "Second").await?;
    let third = test.loot().insert_character(guild.id, None, "Third").await?;
    test.loot()
        .insert_character_item(first.id, 19019, ItemListType::Prio, 1, Some(raid.id))
        .await?;
    test.loot()
        .insert_character_item(second.id, 19019, ItemListType::Prio, 2, Some(raid.id))
        .await?;
    test.loot()
        .insert_character_item(third.id, 19019, ItemListType::Prio, 3, Some(raid.id))
        .await?;
    let other_item = test
        .loot()
        .insert_character_item(third.id, 17076, ItemListType::Prio, 3, Some(raid.id))
        .await?;

    let mut assignment = request(vec![entry(0, Some(19019), Some(second.id))]);
    assignment.raid_id = Some(raid.id);
    assignment.delete_prio_items = true;

    let ctx = context(&test, guild.id, member.user_id).await;
    let outcome = AssignmentService::new(&test.state.db)
        .assign(&ctx, assignment)
        .await
        .unwrap();

    let first_prio = character_rows(&test, first.id, ItemListType::Prio).await;
    let second_prio = character_rows(&test, second.id, ItemListType::Prio).await;
    let third_prio = character_rows(&test, third.id, ItemListType::Prio).await;
    assert_eq!(first_prio[0].order, 1);
    assert!(second_prio.is_empty());
    let thunderfury = third_prio.iter().find(|r| r.item_id == 19019).unwrap();
    let bonereaver = third_prio.iter().find(|r| r.id == other_item.id).unwrap();
    assert_eq!(thunderfury.order, 2);
    assert_eq!(bonereaver.order, 3);

    let descriptions: Vec<String> = audit_rows(&test, outcome.batch_id)
        .await
        .into_iter()
        .map(|a| a.description)
        .collect();
    assert!(descriptions
        .contains(&"System removed 1 prio after character was assigned item".to_string()));

    Ok(())
}

/// Expect the prio to be flagged, keeping its order, when not deleting
#[tokio::test]
async fn flag_keeps_ranking() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    test.loot().insert_item(19019, 1, "Thunderfury").await?;
    let first = test.loot().insert_character(guild.id, None, "First").await?;
    let second = test.loot().insert_character(guild.id, None, "Second").await?;
    test.loot()
        .insert_character_item(first.id, 19019, ItemListType::Prio, 1, None)
        .await?;
    test.loot()
        .insert_character_item(second.id, 19019, ItemListType::Prio, 2, None)
        .await?;

    let ctx = context(&test, guild.id, member.user_id).await;
    let outcome = AssignmentService::new(&test.state.db)
        .assign(&ctx, request(vec![entry(0, Some(19019), Some(first.id))]))
        .await
        .unwrap();

    let first_prio = character_rows(&test, first.id, ItemListType::Prio).await;
    let second_prio = character_rows(&test, second.id, ItemListType::Prio).await;
    assert!(first_prio[0].is_received);
    assert_eq!(first_prio[0].order, 1);
    assert_eq!(second_prio[0].order, 2);

    let prio_audit = audit_rows(&test, outcome.batch_id)
        .await
        .into_iter()
        .find(|a| a.log_type == Some(entity::sea_orm_active_enums::AuditLogType::Prio))
        .unwrap();
    assert_eq!(
        prio_audit.description,
        "System flagged 1 prio as received after character was assigned item"
    );

    Ok(())
}
