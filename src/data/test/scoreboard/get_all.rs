use super::*;

/// Tests loading every scoreboard.
///
/// Verifies that rows are returned in insertion order.
///
/// Expected: Ok with all scoreboards
#[tokio::test]
async fn returns_all_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_scoreboard(db).await?;
    let second = factory::create_scoreboard(db).await?;

    let repo = ScoreboardRepository::new(db);
    let scoreboards = repo.get_all().await?;

    assert_eq!(scoreboards.len(), 2);
    assert_eq!(scoreboards[0].id, first.id);
    assert_eq!(scoreboards[1].id, second.id);

    Ok(())
}

/// Tests loading from an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_scoreboards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
