//! User service for business logic.
//!
//! This module provides the `UserService` for user queries, including the listing
//! of a user's favorites which first verifies the user exists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{favorite::Favorite, user::User},
};

/// Service providing business logic for user queries.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user ordered by ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves the favorites of a user.
    ///
    /// Verifies the user exists before listing so that an unknown user is reported
    /// rather than answered with an empty list.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites ordered by ID
    /// - `Err(AppError::NotFound)` - User with specified ID does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        // Verify user exists
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let favorites = FavoriteRepository::new(self.db).get_by_user(user_id).await?;

        Ok(favorites)
    }
}
