//! User domain model and operation parameters.
//!
//! Provides the domain model for a player's game-state record along with parameter
//! types for the read, upsert, and single-field update operations.

/// Player game-state record.
///
/// Tracks the user's messaging-platform id, display name, progression level, and
/// gold balance. One record exists per id; there are no relationships to other
/// entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Messaging-platform user id.
    pub id: i64,
    /// Display name of the user.
    pub username: String,
    /// Progression counter.
    pub level: i64,
    /// Currency balance.
    pub gold: i64,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            level: entity.level,
            gold: entity.gold,
        }
    }
}

/// Parameters for saving a user's full game-state record.
///
/// Creates a new record for an unseen id or overwrites every field of the
/// existing record. All fields are required; zero is a valid value for
/// `level` and `gold`.
#[derive(Debug, Clone)]
pub struct SaveUserParam {
    /// Messaging-platform user id.
    pub id: i64,
    /// Display name of the user.
    pub username: String,
    /// Progression counter.
    pub level: i64,
    /// Currency balance.
    pub gold: i64,
}

/// Parameters for updating only a user's gold balance.
///
/// Update-only: the operation never creates a record for an unseen id.
#[derive(Debug, Clone)]
pub struct SetGoldParam {
    /// Messaging-platform user id.
    pub id: i64,
    /// New currency balance.
    pub gold: i64,
}

/// Parameters for updating only a user's level.
///
/// Update-only: the operation never creates a record for an unseen id.
#[derive(Debug, Clone)]
pub struct SetLevelParam {
    /// Messaging-platform user id.
    pub id: i64,
    /// New progression counter.
    pub level: i64,
}
