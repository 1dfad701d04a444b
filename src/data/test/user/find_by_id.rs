use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding an existing user record by id.
///
/// Verifies that the repository retrieves a record when queried with an id
/// that exists in the database.
///
/// Expected: Ok(Some(User)) with matching record data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
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
    let result = repo.find_by_id(42).await;

    assert!(result.is_ok());
    let user_opt = result.unwrap();
    assert!(user_opt.is_some());
    let user = user_opt.unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.username, "ann");
    assert_eq!(user.level, 1);
    assert_eq!(user.gold, 100);

    Ok(())
}

/// Tests querying for a non-existent user record.
///
/// Verifies that the repository returns None when queried with an id that does
/// not exist, and that the read leaves no record behind.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999_999_999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    // Reading must not create a row
    assert!(repo.find_by_id(999_999_999).await?.is_none());

    Ok(())
}
