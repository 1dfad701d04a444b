//! User service for game-state business logic.
//!
//! This module provides the `UserService` for reading and writing user game-state
//! records. It classifies repository outcomes into the application error taxonomy:
//! a missing record becomes `NotFound`, and a write that affects no rows becomes
//! `WriteFailed`.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{SaveUserParam, SetGoldParam, SetLevelParam, User},
};

/// Service providing business logic for user game-state management.
///
/// This struct holds a reference to the database connection and provides methods
/// for whole-record reads and upserts plus single-field gold and level operations.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's full game-state record.
    ///
    /// Never creates a record as a side effect of reading.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    ///
    /// # Returns
    /// - `Ok(User)` - The stored record
    /// - `Err(AppError::NotFound)` - No record exists for the id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Saves a user's full game-state record.
    ///
    /// Creates a new record for an unseen id or overwrites every field of the
    /// existing record, then returns the persisted state.
    ///
    /// # Arguments
    /// - `param` - Validated record fields
    ///
    /// # Returns
    /// - `Ok(User)` - The persisted record
    /// - `Err(AppError::WriteFailed)` - Storage reported no persisted row
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn save_user(&self, param: SaveUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.upsert(param).await {
            Ok(user) => Ok(user),
            Err(DbErr::RecordNotInserted) => Err(AppError::WriteFailed(
                "Failed to save user data".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves only the gold balance for a user.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    ///
    /// # Returns
    /// - `Ok(i64)` - The stored gold balance
    /// - `Err(AppError::NotFound)` - No record exists for the id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_gold(&self, id: i64) -> Result<i64, AppError> {
        let user = self.get_user(id).await?;
        Ok(user.gold)
    }

    /// Updates the gold balance for an existing user.
    ///
    /// Update-only: adjusts currency on an existing record and never creates one.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the user id and new gold balance
    ///
    /// # Returns
    /// - `Ok(())` - Gold balance updated
    /// - `Err(AppError::NotFound)` - No record exists for the id
    /// - `Err(AppError::WriteFailed)` - Update affected zero rows
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn set_gold(&self, param: SetGoldParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        // Verify user exists; this endpoint never creates a record
        if user_repo.find_by_id(param.id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let affected = user_repo.set_gold(param.id, param.gold).await?;
        if affected == 0 {
            return Err(AppError::WriteFailed("Failed to update gold".to_string()));
        }

        Ok(())
    }

    /// Retrieves only the level for a user.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    ///
    /// # Returns
    /// - `Ok(i64)` - The stored level
    /// - `Err(AppError::NotFound)` - No record exists for the id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_level(&self, id: i64) -> Result<i64, AppError> {
        let user = self.get_user(id).await?;
        Ok(user.level)
    }

    /// Updates the level for an existing user.
    ///
    /// Update-only: adjusts progression on an existing record and never creates one.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the user id and new level
    ///
    /// # Returns
    /// - `Ok(())` - Level updated
    /// - `Err(AppError::NotFound)` - No record exists for the id
    /// - `Err(AppError::WriteFailed)` - Update affected zero rows
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn set_level(&self, param: SetLevelParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        // Verify user exists; this endpoint never creates a record
        if user_repo.find_by_id(param.id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let affected = user_repo.set_level(param.id, param.level).await?;
        if affected == 0 {
            return Err(AppError::WriteFailed("Failed to update level".to_string()));
        }

        Ok(())
    }
}
