//! Favorite service for business logic.
//!
//! Adds and removes favorites for a user. Adding verifies the user and the target exist
//! and that the user has not already favorited the target; the store's unique index
//! backs the duplicate check for concurrent requests.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{
        favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::favorite::{AddFavoriteParam, Favorite, FavoriteTarget, RemoveFavoriteParam},
};

/// Service providing business logic for favorite management.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite for a user.
    ///
    /// Checks run in order: user exists, target exists, favorite not already present.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - User or target does not exist
    /// - `Err(AppError::Conflict)` - User already favorited the target
    /// - `Err(AppError::BadRequest)` - Target kind has no catalog to favorite from
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn add(&self, param: AddFavoriteParam) -> Result<Favorite, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(param.user_id)
            .await?;
        if user.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.ensure_target_exists(param.target).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let conflict = || {
            AppError::Conflict(format!(
                "{} already in favorites for this user",
                param.target.label()
            ))
        };

        if favorite_repo
            .find_by_user_and_target(param.user_id, param.target)
            .await?
            .is_some()
        {
            return Err(conflict());
        }

        let favorite = favorite_repo
            .create(param.clone())
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => conflict(),
                _ => AppError::from(err),
            })?;

        tracing::info!(
            "User {} added favorite {:?} (id {})",
            favorite.user_id,
            favorite.target,
            favorite.id
        );

        Ok(favorite)
    }

    /// Removes a favorite from a user.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the favorite
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(AppError::NotFound)` - The user has no such favorite
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn remove(&self, param: RemoveFavoriteParam) -> Result<(), AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .find_by_user_and_target(param.user_id, param.target)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Favorite {} not found for this user",
                    param.target.label().to_lowercase()
                ))
            })?;

        favorite_repo.delete(favorite.id).await?;

        tracing::info!(
            "User {} removed favorite {:?} (id {})",
            param.user_id,
            param.target,
            favorite.id
        );

        Ok(())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), AppError> {
        let exists = match target {
            FavoriteTarget::Person(id) => PeopleRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
            FavoriteTarget::Species(_) | FavoriteTarget::Starship(_) | FavoriteTarget::Vehicle(_) => {
                return Err(AppError::BadRequest(format!(
                    "{} favorites are not supported",
                    target.label()
                )))
            }
        };

        if !exists {
            return Err(AppError::NotFound(format!("{} not found", target.label())));
        }

        Ok(())
    }
}
