use super::*;

/// Tests creating a new scoreboard row.
///
/// Verifies that the repository stores every field and converts the stored
/// snowflakes back to their numeric form.
///
/// Expected: Ok with scoreboard created
#[tokio::test]
async fn creates_scoreboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);
    let scoreboard = repo.create(create_param(555)).await?;

    assert_eq!(scoreboard.name, "Server #1");
    assert_eq!(scoreboard.guild_id, 987654321);
    assert_eq!(scoreboard.message_id, 555);
    assert_eq!(scoreboard.server_id, 1);
    assert!(scoreboard.scoreboard_url.is_none());

    let stored = entity::prelude::Scoreboard::find_by_id(scoreboard.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.message_id, "555");

    Ok(())
}

/// Tests that two scoreboards cannot share a message.
///
/// Verifies the unique index on the message id column.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);
    repo.create(create_param(555)).await?;
    let result = repo.create(create_param(555)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let count = entity::prelude::Scoreboard::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
