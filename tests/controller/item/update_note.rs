use sea_orm::EntityTrait;

use super::*;

/// Expect the note to be created with a flash & a redirect to the item page
#[tokio::test]
async fn creates_note_and_redirects() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&["edit.items"]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = update_note(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[
            ("id", "17076"),
            ("note", "Fury warriors"),
            ("priority", "Tanks > DPS"),
        ])),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!("/{}/{}/item/17076/bonereavers-edge", guild.id, guild.slug)
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("Successfully created Bonereaver's Edge's note.")
    );

    let row = entity::prelude::GuildItem::find()
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(row.priority.as_deref(), Some("Tanks > DPS"));
    assert_eq!(row.created_by, Some(member.id));

    Ok(())
}

/// Expect a redirect to the item page with a flash & nothing written without `edit.items`
#[tokio::test]
async fn redirects_to_item_without_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = update_note(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[("id", "17076"), ("note", "Sneaky")])),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!("/{}/{}/item/17076/bonereavers-edge", guild.id, guild.slug)
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("You don't have permissions to edit items.")
    );
    let rows = entity::prelude::GuildItem::find()
        .all(&test.state.db)
        .await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Expect 422 for an item outside the guild's expansion
#[tokio::test]
async fn rejects_item_of_other_expansion() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&["edit.items"]).await?;
    test.loot().insert_item(30000, 2, "Outland Blade").await?;
    sign_in(&test, member.user_id).await;

    let result = update_note(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone())),
        Form(form(&[("id", "30000"), ("note", "Too early")])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
