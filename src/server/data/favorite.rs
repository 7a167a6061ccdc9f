//! Favorite data repository for database operations
//!
//! Provides the `FavoriteRepository` for managing favorites in the database.
//! Provides methods to create, find, list, and delete favorites as well as handles
//! the conversion of database entity models into domain models for usage within
//! services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{AddFavoriteParam, Favorite, FavoriteTarget};

/// Repository providing database operations for favorite management.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new favorite
    ///
    /// The `(user_id, target_kind, target_id)` unique index rejects duplicates, so a
    /// concurrent identical insert fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the new favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite as a domain model
    /// - `Err(DbErr)` - Database error during insert, including duplicate favorites
    pub async fn create(&self, param: AddFavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            target_kind: ActiveValue::Set(param.target.kind()),
            target_id: ActiveValue::Set(param.target.id()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Finds the favorite a user holds on a specific target
    ///
    /// # Arguments
    /// - `user_id` - ID of the user owning the favorite
    /// - `target` - The favorited entity
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user already favorited the target
    /// - `Ok(None)` - No such favorite
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::TargetKind.eq(target.kind()))
            .filter(entity::favorite::Column::TargetId.eq(target.id()))
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Gets every favorite of a user ordered by ID
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Deletes favorite of the provided ID
    ///
    /// # Arguments
    /// - `id` - The ID of the favorite to delete
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted or did not exist
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
