use super::*;

/// Tests getting an existing player by id.
///
/// Expected: Ok(Some) with the matching row
#[tokio::test]
async fn gets_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let result = repo.get_by_id(player.id).await?;

    assert_eq!(result, Some(player));

    Ok(())
}

/// Tests getting a player that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
