use super::*;
use test_utils::factory::user::UserFactory;

/// Tests updating gold on an existing record.
///
/// Verifies that set_gold changes only the gold column and reports one
/// affected row, leaving username and level untouched.
///
/// Expected: Ok(1) with gold updated and other fields unchanged
#[tokio::test]
async fn updates_gold_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .id(42)
        .username("ann")
        .level(1)
        .gold(100)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let affected = repo.set_gold(42, 150).await?;
    assert_eq!(affected, 1);

    let user = repo.find_by_id(42).await?.unwrap();
    assert_eq!(user.gold, 150);
    assert_eq!(user.username, "ann");
    assert_eq!(user.level, 1);

    Ok(())
}

/// Tests that sequential updates leave only the latest value.
///
/// Expected: Ok with gold reflecting the last write
#[tokio::test]
async fn keeps_latest_of_sequential_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).id(42).gold(100).build().await?;

    let repo = UserRepository::new(db);
    repo.set_gold(42, 150).await?;
    repo.set_gold(42, 75).await?;

    let user = repo.find_by_id(42).await?.unwrap();
    assert_eq!(user.gold, 75);

    Ok(())
}

/// Tests updating gold for a missing record.
///
/// Verifies that the update affects zero rows and never inserts.
///
/// Expected: Ok(0) with no record created
#[tokio::test]
async fn reports_zero_affected_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let affected = repo.set_gold(42, 150).await?;

    assert_eq!(affected, 0);
    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
