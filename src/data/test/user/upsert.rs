use super::*;

/// Tests creating a new user record.
///
/// Verifies that the repository inserts a record for an id with no existing row
/// and returns the persisted fields.
///
/// Expected: Ok with all fields matching the parameters
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(SaveUserParam {
            id: 42,
            username: "ann".to_string(),
            level: 1,
            gold: 100,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.username, "ann");
    assert_eq!(user.level, 1);
    assert_eq!(user.gold, 100);

    Ok(())
}

/// Tests overwriting an existing user record.
///
/// Verifies that a second upsert for the same id takes the update path and
/// overwrites every field rather than inserting a duplicate row.
///
/// Expected: Ok with all fields replaced by the new values
#[tokio::test]
async fn overwrites_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(SaveUserParam {
        id: 42,
        username: "ann".to_string(),
        level: 1,
        gold: 100,
    })
    .await?;

    let result = repo
        .upsert(SaveUserParam {
            id: 42,
            username: "bea".to_string(),
            level: 7,
            gold: 9000,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "bea");
    assert_eq!(user.level, 7);
    assert_eq!(user.gold, 9000);

    // Still a single row for the id
    let stored = repo.find_by_id(42).await?;
    assert_eq!(stored.unwrap().username, "bea");

    Ok(())
}

/// Tests that zero is accepted as a stored value.
///
/// Verifies that level and gold of zero are persisted rather than treated as
/// absent.
///
/// Expected: Ok with level and gold both zero
#[tokio::test]
async fn accepts_zero_level_and_gold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(SaveUserParam {
            id: 7,
            username: "zed".to_string(),
            level: 0,
            gold: 0,
        })
        .await?;

    assert_eq!(user.level, 0);
    assert_eq!(user.gold, 0);

    Ok(())
}

/// Tests that ids beyond the 32-bit range round-trip.
///
/// Messaging-platform ids exceed u32; verifies the primary key stores them
/// without truncation.
///
/// Expected: Ok with the full id preserved
#[tokio::test]
async fn stores_large_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = 5_000_000_000_i64;

    repo.upsert(SaveUserParam {
        id,
        username: "big".to_string(),
        level: 3,
        gold: 12,
    })
    .await?;

    let stored = repo.find_by_id(id).await?;
    assert_eq!(stored.unwrap().id, id);

    Ok(())
}
