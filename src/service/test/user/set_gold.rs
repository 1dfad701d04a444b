use super::*;
use test_utils::factory::user::UserFactory;

/// Tests updating gold through the service.
///
/// Expected: Ok with only the gold field changed
#[tokio::test]
async fn updates_existing_record() -> Result<(), DbErr> {
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

    let service = UserService::new(db);
    service
        .set_gold(SetGoldParam { id: 42, gold: 150 })
        .await
        .unwrap();

    let user = service.get_user(42).await.unwrap();
    assert_eq!(user.gold, 150);
    assert_eq!(user.level, 1);
    assert_eq!(user.username, "ann");

    Ok(())
}

/// Tests updating gold for a missing record.
///
/// Verifies the service signals NotFound and performs no insert.
///
/// Expected: Err(AppError::NotFound) and no record afterwards
#[tokio::test]
async fn signals_not_found_without_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.set_gold(SetGoldParam { id: 42, gold: 150 }).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.get_user(42).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests updating level for a missing record.
///
/// Expected: Err(AppError::NotFound) and no record afterwards
#[tokio::test]
async fn level_update_signals_not_found_without_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.set_level(SetLevelParam { id: 42, level: 2 }).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.get_user(42).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
