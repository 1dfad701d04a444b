//! Request and response DTOs for the HTTP API.
//!
//! Request bodies deserialize every field as `Option` so that presence validation
//! happens explicitly in `into_param` before any storage call, rather than as an
//! opaque deserialization failure. Zero is a valid value for numeric fields; only
//! omission (and an empty username) counts as missing.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::user::{SaveUserParam, SetGoldParam, SetLevelParam},
};

/// Generic message body used for errors and single-field update confirmations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// Request body for POST /user/{id}.
#[derive(Debug, Deserialize)]
pub struct SaveUserDto {
    pub username: Option<String>,
    pub level: Option<i64>,
    pub gold: Option<i64>,
}

impl SaveUserDto {
    /// Validates field presence and converts the body into save parameters.
    ///
    /// # Arguments
    /// - `id` - User id from the request path
    ///
    /// # Returns
    /// - `Ok(SaveUserParam)` - All required fields present
    /// - `Err(AppError::MissingField)` - Username empty or absent, or level/gold omitted
    pub fn into_param(self, id: i64) -> Result<SaveUserParam, AppError> {
        match (self.username, self.level, self.gold) {
            (Some(username), Some(level), Some(gold)) if !username.is_empty() => {
                Ok(SaveUserParam {
                    id,
                    username,
                    level,
                    gold,
                })
            }
            _ => Err(AppError::MissingField(
                "Missing required fields".to_string(),
            )),
        }
    }
}

/// Response body for POST /user/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveUserResponseDto {
    pub message: String,
    /// Signed credential binding the persisted record's fields.
    pub token: String,
}

/// Request body for POST /user/{id}/gold.
#[derive(Debug, Deserialize)]
pub struct SetGoldDto {
    pub gold: Option<i64>,
}

impl SetGoldDto {
    /// Validates field presence and converts the body into update parameters.
    ///
    /// # Arguments
    /// - `id` - User id from the request path
    ///
    /// # Returns
    /// - `Ok(SetGoldParam)` - Gold field present
    /// - `Err(AppError::MissingField)` - Gold field omitted
    pub fn into_param(self, id: i64) -> Result<SetGoldParam, AppError> {
        match self.gold {
            Some(gold) => Ok(SetGoldParam { id, gold }),
            None => Err(AppError::MissingField(
                "Missing required fields".to_string(),
            )),
        }
    }
}

/// Request body for POST /user/{id}/level.
#[derive(Debug, Deserialize)]
pub struct SetLevelDto {
    pub level: Option<i64>,
}

impl SetLevelDto {
    /// Validates field presence and converts the body into update parameters.
    ///
    /// # Arguments
    /// - `id` - User id from the request path
    ///
    /// # Returns
    /// - `Ok(SetLevelParam)` - Level field present
    /// - `Err(AppError::MissingField)` - Level field omitted
    pub fn into_param(self, id: i64) -> Result<SetLevelParam, AppError> {
        match self.level {
            Some(level) => Ok(SetLevelParam { id, level }),
            None => Err(AppError::MissingField(
                "Missing required fields".to_string(),
            )),
        }
    }
}
