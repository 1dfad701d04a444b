//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Using builder pattern for customization
//!     let user = factory::user::UserFactory::new(&db)
//!         .id(42)
//!         .username("ann")
//!         .level(1)
//!         .gold(100)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use user::create_user;
