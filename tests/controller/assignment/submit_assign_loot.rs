use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect the items to be recorded & a redirect to the batch's audit log
#[tokio::test]
async fn records_loot_and_redirects_to_batch() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    seed_molten_core(&mut test).await?;
    let warrior = test.loot().insert_character(guild.id, None, "Warrior").await?;
    sign_in(&test, member.user_id).await;

    let character_id = warrior.id.to_string();
    let result = submit_assign_loot(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("name", "MC week 1"),
            ("item[0][id]", "17076"),
            ("item[0][character_id]", &character_id),
        ])),
    )
    .await;

    let resp = result.unwrap();
    let batch = entity::prelude::Batch::find()
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!(
            "/{}/{}/audit-log?batch_id={}",
            guild.id, guild.slug, batch.id
        )
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("Successfully added 1 items. 0 failures.")
    );
    assert_eq!(
        entity::prelude::CharacterItem::find()
            .count(&test.state.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect rows without a character to be reported in the flash
#[tokio::test]
async fn reports_missing_characters() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    seed_molten_core(&mut test).await?;
    let warrior = test.loot().insert_character(guild.id, None, "Warrior").await?;
    sign_in(&test, member.user_id).await;

    let character_id = warrior.id.to_string();
    let result = submit_assign_loot(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("item[0][id]", "17076"),
            ("item[0][character_id]", &character_id),
            ("item[1][id]", "17076"),
            ("item[1][label]", "Bonereaver"),
        ])),
    )
    .await;

    assert_eq!(result.unwrap().status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("Successfully added 1 items. 1 failures: Bonereaver to missing character")
    );

    Ok(())
}

/// Expect 422 & nothing written for a malformed receipt date
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test
        .loot()
        .insert_guild_with_member(&["edit.raid-loot"])
        .await?;
    seed_molten_core(&mut test).await?;
    let warrior = test.loot().insert_character(guild.id, None, "Warrior").await?;
    sign_in(&test, member.user_id).await;

    let character_id = warrior.id.to_string();
    let result = submit_assign_loot(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("item[0][id]", "17076"),
            ("item[0][character_id]", &character_id),
            ("item[0][received_at]", "not a date"),
        ])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(entity::prelude::Batch::find().count(&test.state.db).await?, 0);

    Ok(())
}

/// Expect a permission flash & nothing written without `edit.raid-loot`
#[tokio::test]
async fn redirects_without_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    let warrior = test.loot().insert_character(guild.id, None, "Warrior").await?;
    sign_in(&test, member.user_id).await;

    let character_id = warrior.id.to_string();
    let result = submit_assign_loot(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("item[0][id]", "17076"),
            ("item[0][character_id]", &character_id),
        ])),
    )
    .await;

    assert_eq!(result.unwrap().status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("You don't have permissions to submit that.")
    );
    assert_eq!(entity::prelude::Batch::find().count(&test.state.db).await?, 0);

    Ok(())
}

/// Expect field validation to run ahead of the `edit.raid-loot` check
#[tokio::test]
async fn validates_before_permission_check() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = submit_assign_loot(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("item[0][id]", "17076"),
            ("item[0][character_id]", "not-an-id"),
        ])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(flash(&test).await, None);
    assert_eq!(entity::prelude::Batch::find().count(&test.state.db).await?, 0);

    Ok(())
}
