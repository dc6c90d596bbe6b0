use super::*;
use test_utils::factory::player::PlayerFactory;

/// Tests aggregate queries on an empty table.
///
/// Expected: Zero sums, no top scorer, no position groups
#[tokio::test]
async fn aggregates_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.count().await?, 0);
    assert_eq!(repo.sum_ppg_and_years().await?, (0.0, 0));
    assert!(repo.get_top_scorer().await?.is_none());
    assert!(repo.count_by_position().await?.is_empty());

    Ok(())
}

/// Tests sums, top scorer and position grouping.
///
/// Expected: Sums over every row, highest ppg as top scorer, one group per
/// populated position
#[tokio::test]
async fn aggregates_populated_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .position("C")
        .ppg(10.0)
        .years(2)
        .build()
        .await?;
    let top = PlayerFactory::new(db)
        .position("C")
        .ppg(30.0)
        .years(4)
        .build()
        .await?;
    PlayerFactory::new(db)
        .position("PG")
        .ppg(20.0)
        .years(9)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.sum_ppg_and_years().await?, (60.0, 15));
    assert_eq!(repo.get_top_scorer().await?, Some(top));

    let mut groups = repo.count_by_position().await?;
    groups.sort();
    assert_eq!(groups, vec![("C".to_string(), 2), ("PG".to_string(), 1)]);

    Ok(())
}
