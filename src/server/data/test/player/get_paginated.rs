use super::*;
use test_utils::factory::player::PlayerFactory;

/// Tests listing players without filters.
///
/// Expected: Ok with every player ordered by name and total count
#[tokio::test]
async fn lists_all_players_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Trae Young", "Bam Adebayo", "Ja Morant"] {
        PlayerFactory::new(db).name(name).build().await?;
    }

    let repo = PlayerRepository::new(db);
    let (players, window) = repo
        .get_paginated(&list_query(PlayerListParams::default()))
        .await?;

    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bam Adebayo", "Ja Morant", "Trae Young"]);
    assert_eq!(window.total, 3);
    assert_eq!(window.total_pages, 1);
    assert_eq!(window.page, 1);

    Ok(())
}

/// Tests search matches name or team, ignoring ASCII case.
///
/// Expected: Ok with players whose name or team contains the term
#[tokio::test]
async fn searches_name_and_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .name("LeBron James")
        .team("Lakers")
        .build()
        .await?;
    PlayerFactory::new(db)
        .name("Anthony Davis")
        .team("Lakers")
        .build()
        .await?;
    PlayerFactory::new(db)
        .name("Jimmy Butler")
        .team("Heat")
        .build()
        .await?;
    PlayerFactory::new(db)
        .name("Lamar Odom")
        .team("Clippers")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let (players, window) = repo
        .get_paginated(&list_query(PlayerListParams {
            search: Some("LA".to_string()),
            ..Default::default()
        }))
        .await?;

    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anthony Davis", "Lamar Odom", "LeBron James"]);
    assert_eq!(window.total, 3);

    Ok(())
}

/// Tests position filter combined with search.
///
/// Expected: Ok with only rows matching both predicates
#[tokio::test]
async fn combines_search_and_position_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .name("Devin Booker")
        .team("Suns")
        .position("SG")
        .build()
        .await?;
    PlayerFactory::new(db)
        .name("Kevin Durant")
        .team("Suns")
        .position("SF")
        .build()
        .await?;
    PlayerFactory::new(db)
        .name("Donovan Mitchell")
        .team("Cavaliers")
        .position("SG")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let (players, window) = repo
        .get_paginated(&list_query(PlayerListParams {
            search: Some("suns".to_string()),
            position: Some("SG".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Devin Booker");
    assert_eq!(window.total, 1);

    Ok(())
}

/// Tests an unknown position filter is ignored.
///
/// Expected: Ok with the same rows as an unfiltered listing
#[tokio::test]
async fn ignores_unknown_position_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db).position("C").build().await?;
    PlayerFactory::new(db).position("PG").build().await?;

    let repo = PlayerRepository::new(db);
    let (unfiltered, _) = repo
        .get_paginated(&list_query(PlayerListParams::default()))
        .await?;
    let (filtered, window) = repo
        .get_paginated(&list_query(PlayerListParams {
            position: Some("XX".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(filtered, unfiltered);
    assert_eq!(window.total, 2);

    Ok(())
}

/// Tests sorting by points per game descending.
///
/// Expected: Ok with highest scorer first
#[tokio::test]
async fn sorts_by_ppg_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for ppg in [20.4, 30.1, 25.0] {
        factory::create_player_with_ppg(db, ppg).await?;
    }

    let repo = PlayerRepository::new(db);
    let (players, _) = repo
        .get_paginated(&list_query(PlayerListParams {
            sort_by: Some("ppg".to_string()),
            sort_dir: Some("desc".to_string()),
            ..Default::default()
        }))
        .await?;

    let ppgs: Vec<_> = players.iter().map(|p| p.ppg).collect();
    assert_eq!(ppgs, vec![30.1, 25.0, 20.4]);

    Ok(())
}

/// Tests pagination over 23 rows with a page size of 10.
///
/// Verifies page sizes, that pages don't overlap, and that a page past the end
/// is clamped to the last page.
///
/// Expected: Ok with 3 pages of 10, 10 and 3 rows
#[tokio::test]
async fn paginates_and_clamps_to_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..23 {
        PlayerFactory::new(db)
            .name(format!("Player {:02}", i))
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let page = |number: &str| {
        list_query(PlayerListParams {
            page: Some(number.to_string()),
            page_size: Some("10".to_string()),
            ..Default::default()
        })
    };

    let (first, window) = repo.get_paginated(&page("1")).await?;
    assert_eq!(first.len(), 10);
    assert_eq!(window.total, 23);
    assert_eq!(window.total_pages, 3);
    assert_eq!(first[0].name, "Player 00");

    let (second, _) = repo.get_paginated(&page("2")).await?;
    assert_eq!(second.len(), 10);
    assert_eq!(second[0].name, "Player 10");

    let (last, _) = repo.get_paginated(&page("3")).await?;
    let (clamped, window) = repo.get_paginated(&page("99")).await?;
    assert_eq!(window.page, 3);
    assert_eq!(clamped.len(), 3);
    assert_eq!(clamped, last);
    assert_eq!(clamped[0].name, "Player 20");

    Ok(())
}

/// Tests a search that matches nothing.
///
/// Expected: Ok with no rows, total 0 and a single empty page
#[tokio::test]
async fn unmatched_search_returns_single_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let (players, window) = repo
        .get_paginated(&list_query(PlayerListParams {
            search: Some("zzzz".to_string()),
            page: Some("4".to_string()),
            ..Default::default()
        }))
        .await?;

    assert!(players.is_empty());
    assert_eq!(window.total, 0);
    assert_eq!(window.total_pages, 1);
    assert_eq!(window.page, 1);

    Ok(())
}
