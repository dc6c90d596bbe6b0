use super::*;

/// Tests creating a player.
///
/// Verifies that the repository stores every field and assigns an id and
/// creation timestamp.
///
/// Expected: Ok with stored row
#[tokio::test]
async fn creates_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.create(params("Jayson Tatum")).await?;

    assert!(player.id > 0);
    assert_eq!(player.name, "Jayson Tatum");
    assert_eq!(player.team, "Celtics");
    assert_eq!(player.position, "SF");
    assert_eq!(player.ppg, 26.9);
    assert_eq!(player.years, 9);
    assert_eq!(player.image_url, "");

    let stored = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, player);

    Ok(())
}

/// Tests ids are never reused after a delete.
///
/// Expected: New row gets an id greater than the deleted one
#[tokio::test]
async fn does_not_reuse_deleted_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let first = repo.create(params("First")).await?;
    let second = repo.create(params("Second")).await?;
    repo.delete(second.id).await?;

    let third = repo.create(params("Third")).await?;

    assert!(third.id > second.id);
    assert_ne!(third.id, first.id);

    Ok(())
}
