//! User domain model.

use crate::model::user::UserDto;

/// Registered user able to own favorites.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            is_active: self.is_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            is_active: entity.is_active,
        }
    }
}
