//! Person domain model.
//!
//! A person is a read-only catalog entry. Descriptive attributes are kept as the raw
//! catalog strings (e.g. `"unknown"`, `"19BBY"`) since they carry no numeric semantics
//! for this API.

use crate::model::people::PersonDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl Person {
    /// Converts the person domain model to a DTO for API responses.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            gender: self.gender,
        }
    }

    /// Converts an entity model to a person domain model at the repository boundary.
    pub fn from_entity(entity: entity::people::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            mass: entity.mass,
            hair_color: entity.hair_color,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
        }
    }
}
