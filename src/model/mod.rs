//! Domain models, operation parameters, and API DTOs.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! operation inputs from the controller layer into the service layer.

pub mod api;
pub mod user;
