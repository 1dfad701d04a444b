use super::*;
use test_utils::factory::user::UserFactory;

/// Tests updating level on an existing record.
///
/// Verifies that set_level changes only the level column and reports one
/// affected row, leaving username and gold untouched.
///
/// Expected: Ok(1) with level updated and other fields unchanged
#[tokio::test]
async fn updates_level_only() -> Result<(), DbErr> {
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
    let affected = repo.set_level(42, 2).await?;
    assert_eq!(affected, 1);

    let user = repo.find_by_id(42).await?.unwrap();
    assert_eq!(user.level, 2);
    assert_eq!(user.username, "ann");
    assert_eq!(user.gold, 100);

    Ok(())
}

/// Tests updating level for a missing record.
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
    let affected = repo.set_level(42, 2).await?;

    assert_eq!(affected, 0);
    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
