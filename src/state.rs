//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::service::token::TokenIssuer;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted types) for each incoming
/// request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenIssuer` holds a prepared signing key
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a bounded pool
    /// of connections to the database.
    pub db: DatabaseConnection,

    /// Issuer for signed game-state credentials.
    ///
    /// Built from the configured signing secret at startup; handlers use it to
    /// sign the record returned by a successful read or write.
    pub token_issuer: TokenIssuer,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_issuer` - Credential issuer built from the signing secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, token_issuer: TokenIssuer) -> Self {
        Self { db, token_issuer }
    }
}
