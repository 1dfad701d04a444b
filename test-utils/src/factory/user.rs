//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .id(42)
///     .username("ann")
///     .level(1)
///     .gold(100)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    username: String,
    level: i64,
    gold: i64,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - username: `"User {id}"`
    /// - level: `1`
    /// - gold: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            username: format!("User {}", id),
            level: 1,
            gold: 0,
        }
    }

    /// Sets the id for the user.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the username for the user.
    ///
    /// # Arguments
    /// - `username` - Display name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the level for the user.
    ///
    /// # Arguments
    /// - `level` - Progression counter value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    /// Sets the gold balance for the user.
    ///
    /// # Arguments
    /// - `gold` - Currency balance value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn gold(mut self, gold: i64) -> Self {
        self.gold = gold;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            level: ActiveValue::Set(self.level),
            gold: ActiveValue::Set(self.gold),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
