//! HTTP request handlers.
//!
//! Controllers extract path and body parameters, perform presence validation before
//! touching storage, invoke the corresponding service operation, and map results to
//! response bodies and status codes. Error mapping to status codes lives on
//! `AppError`'s `IntoResponse` implementation.

pub mod user;
