//! Signed credential issuance for game-state records.
//!
//! After a successful read or write, the API returns a signed credential binding the
//! record's fields. The credential is an HS256 JWT over the record's claims with no
//! expiry or audience; nothing in this system verifies it, so it is opaque
//! data-carrying output rather than an authentication token.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::user::User};

/// Claims encoded into an issued credential.
///
/// Mirrors the persisted record exactly: id, username, level, and gold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: i64,
    pub username: String,
    pub level: i64,
    pub gold: i64,
}

impl UserClaims {
    /// Builds claims from a user domain model.
    ///
    /// # Arguments
    /// - `user` - The just-read or just-written record
    ///
    /// # Returns
    /// - `UserClaims` - Claims mirroring the record's fields
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            level: user.level,
            gold: user.gold,
        }
    }
}

/// Issues signed credentials from a process-wide secret key.
///
/// Constructed once at startup from configuration and injected through the
/// application state rather than read from an ambient global.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Creates a new TokenIssuer from the signing secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC signing secret from configuration
    ///
    /// # Returns
    /// - `TokenIssuer` - Issuer ready to sign credentials
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a credential binding the record's fields.
    ///
    /// # Arguments
    /// - `user` - The record whose fields become the claims
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWT string
    /// - `Err(AppError::TokenErr)` - Signing failure
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let claims = UserClaims::from_user(user);
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(token)
    }
}
