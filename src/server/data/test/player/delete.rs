use super::*;

/// Tests deleting an existing player.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(player.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(player.id).await?.is_none());
    assert!(repo.get_by_id(other.id).await?.is_some());

    Ok(())
}

/// Tests deleting a player that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
