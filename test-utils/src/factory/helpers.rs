//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one user, one person and one planet with default values.
///
/// Covers the common setup for favorite tests. Use the individual factories
/// to customize any of the entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, person, planet))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catalog(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::people::Model,
        entity::planet::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let person = crate::factory::people::create_person(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;

    Ok((user, person, planet))
}
