use super::*;

/// Tests replacing all mutable fields of a player.
///
/// Expected: Ok(Some) with new values, id and created_at unchanged
#[tokio::test]
async fn updates_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update(
            player.id,
            PlayerParams {
                name: "Kevin Durant".to_string(),
                team: "Suns".to_string(),
                position: Position::PowerForward,
                ppg: 27.3,
                years: 18,
                image_url: "https://example.com/kd.png".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, player.id);
    assert_eq!(updated.created_at, player.created_at);
    assert_eq!(updated.name, "Kevin Durant");
    assert_eq!(updated.team, "Suns");
    assert_eq!(updated.position, "PF");
    assert_eq!(updated.ppg, 27.3);
    assert_eq!(updated.years, 18);
    assert_eq!(updated.image_url, "https://example.com/kd.png");

    Ok(())
}

/// Tests an update that leaves every value unchanged.
///
/// Verifies existence is not inferred from the number of changed rows.
///
/// Expected: Ok(Some) with the unchanged row
#[tokio::test]
async fn no_op_update_returns_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.create(params("Jrue Holiday")).await?;

    let updated = repo.update(player.id, params("Jrue Holiday")).await?;

    assert_eq!(updated, Some(player));

    Ok(())
}

/// Tests updating a player that doesn't exist.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.update(42, params("Nobody")).await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Player::find().count(db).await?, 0);

    Ok(())
}
