//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::MessageDto};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion, while the request-level variants (`MissingField`, `NotFound`,
/// `WriteFailed`) are produced deliberately after explicit checks in the service and
/// controller layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Credential signing error from jsonwebtoken.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when
    /// Discord bot operations fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Socket bind or serve error.
    ///
    /// Results in 500 Internal Server Error; only reachable during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A required request body field was omitted.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing which fields are missing
    #[error("{0}")]
    MissingField(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Storage reported no rows affected after an expected write.
    ///
    /// Results in 500 Internal Server Error with the provided error message.
    ///
    /// # Fields
    /// - Message describing which write failed
    #[error("{0}")]
    WriteFailed(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Internal errors are logged with full details but return generic messages to
/// avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `MissingField` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For `WriteFailed` with its message, and for all
///   other error types with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingField(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageDto { message: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto { message: msg })).into_response()
            }
            Self::WriteFailed(msg) => {
                tracing::error!("Write failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageDto { message: msg }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
