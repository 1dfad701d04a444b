//! SeaORM entity definitions for the application database schema.

pub mod prelude;

pub mod user;
