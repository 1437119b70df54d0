use super::*;

/// Tests finding a scoreboard by its message.
///
/// Expected: Ok(Some) with the matching scoreboard
#[tokio::test]
async fn finds_scoreboard_by_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_scoreboard(db).await?;
    let target = factory::scoreboard::ScoreboardFactory::new(db)
        .message_id("424242")
        .build()
        .await?;

    let repo = ScoreboardRepository::new(db);
    let found = repo.get_by_message_id(424242).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, target.id);

    Ok(())
}

/// Tests looking up a message no scoreboard uses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_scoreboard(db).await?;

    let repo = ScoreboardRepository::new(db);

    assert!(repo.get_by_message_id(1).await?.is_none());

    Ok(())
}
