//! Favorite factory for creating test favorite entities.
//!
//! Inserts rows directly, bypassing the existence checks performed by the
//! application, so tests can arrange any state they need.

use entity::favorite::TargetKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite of the given kind for a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user owning the favorite
/// - `kind` - Kind of the favorited entity
/// - `target_id` - ID of the favorited entity
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert (including duplicate favorites)
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    kind: TargetKind,
    target_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        target_kind: ActiveValue::Set(kind),
        target_id: ActiveValue::Set(target_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a planet favorite for a user.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite(db, user_id, TargetKind::Planet, planet_id).await
}

/// Creates a person favorite for a user.
pub async fn create_person_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    person_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite(db, user_id, TargetKind::People, person_id).await
}
