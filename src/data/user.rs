//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user game-state records in
//! the database. It handles record lookup, whole-record upsert, and single-field
//! updates with conversion between entity models and domain models at the
//! infrastructure boundary.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::user::{SaveUserParam, User};

/// Repository providing database operations for user game-state records.
///
/// This struct holds a reference to the database connection and provides methods
/// for reading, upserting, and updating user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user record by id.
    ///
    /// Queries the database for a record with the specified id and returns the full
    /// record if found. Reading never creates a record as a side effect.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Record found with full data
    /// - `Ok(None)` - No record exists for that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Upserts a user's full game-state record.
    ///
    /// Inserts a new record for an unseen id or overwrites username, level, and gold
    /// on the existing record. The insert-or-update is a single atomic statement, so
    /// two concurrent first writes for the same id cannot both take the insert path.
    ///
    /// # Arguments
    /// - `param` - Record fields including id, username, level, and gold
    ///
    /// # Returns
    /// - `Ok(User)` - The persisted record
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: SaveUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            username: ActiveValue::Set(param.username),
            level: ActiveValue::Set(param.level),
            gold: ActiveValue::Set(param.gold),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::Level,
                    entity::user::Column::Gold,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Updates the gold balance for an existing user.
    ///
    /// Sets the gold column for the specified user, leaving username and level
    /// untouched. Never inserts; a missing record shows up as zero affected rows.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    /// - `gold` - New currency balance
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (zero when no record matched)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_gold(&self, id: i64, gold: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Gold,
                sea_orm::sea_query::Expr::value(gold),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Updates the level for an existing user.
    ///
    /// Sets the level column for the specified user, leaving username and gold
    /// untouched. Never inserts; a missing record shows up as zero affected rows.
    ///
    /// # Arguments
    /// - `id` - Messaging-platform user id
    /// - `level` - New progression counter
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (zero when no record matched)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_level(&self, id: i64, level: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Level,
                sea_orm::sea_query::Expr::value(level),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
