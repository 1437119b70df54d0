use super::*;

/// Tests deleting a scoreboard by its message.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_scoreboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let keep = factory::create_scoreboard(db).await?;
    let target = factory::scoreboard::ScoreboardFactory::new(db)
        .message_id("999")
        .build()
        .await?;

    let repo = ScoreboardRepository::new(db);
    let deleted = repo.delete_by_message_id(999).await?;

    assert!(deleted);
    assert!(entity::prelude::Scoreboard::find_by_id(target.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Scoreboard::find_by_id(keep.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a message no scoreboard uses.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);

    assert!(!repo.delete_by_message_id(1).await?);

    Ok(())
}
