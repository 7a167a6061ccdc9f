//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
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
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!     let favorite = factory::create_planet_favorite(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@alderaan.org")
//!     .username("leia")
//!     .build()
//!     .await?;
//! ```

pub mod favorite;
pub mod helpers;
pub mod people;
pub mod planet;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use favorite::{create_person_favorite, create_planet_favorite};
pub use people::create_person;
pub use planet::create_planet;
pub use user::create_user;
