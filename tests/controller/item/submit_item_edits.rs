use sea_orm::EntityTrait;

use super::*;

/// Expect submitted notes to be saved & a redirect back to the item list
#[tokio::test]
async fn saves_notes_and_redirects() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&["edit.items"]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = submit_item_edits(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
        Form(form(&[
            ("items[0][id]", "17076"),
            ("items[0][note]", "Fury warriors"),
            ("items[0][priority]", ""),
        ])),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        format!("/{}/{}/items/molten-core", guild.id, guild.slug)
    );
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("Successfully updated notes. 1 added, 0 updated.")
    );

    let rows = entity::prelude::GuildItem::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].note.as_deref(), Some("Fury warriors"));

    Ok(())
}

/// Expect 422 & nothing written when a note is too long
#[tokio::test]
async fn rejects_long_note() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&["edit.items"]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;
    let long_note = "x".repeat(141);

    let result = submit_item_edits(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
        Form(form(&[("items[0][id]", "17076"), ("items[0][note]", &long_note)])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let rows = entity::prelude::GuildItem::find()
        .all(&test.state.db)
        .await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Expect a redirect to the member page without `edit.items`
#[tokio::test]
async fn redirects_without_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_loot_tables!()?;
    let (guild, member) = test.loot().insert_guild_with_member(&[]).await?;
    seed_molten_core(&mut test).await?;
    sign_in(&test, member.user_id).await;

    let result = submit_item_edits(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path((guild.id, guild.slug.clone(), "molten-core".to_string())),
        Form(form(&[("items[0][id]", "17076"), ("items[0][note]", "Nope")])),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash(&test).await.as_deref(),
        Some("You don't have permissions to submit that.")
    );

    Ok(())
}
