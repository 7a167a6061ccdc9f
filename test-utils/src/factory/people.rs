//! People factory for creating test person entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test people with customizable fields.
///
/// Descriptive attributes default to values of a well known character; only
/// `name` is made unique per instance.
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::people::Model,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::people::Model {
                id: 0,
                name: format!("Person {}", next_id()),
                height: Some("172".to_string()),
                mass: Some("77".to_string()),
                hair_color: Some("blond".to_string()),
                skin_color: Some("fair".to_string()),
                eye_color: Some("blue".to_string()),
                birth_year: Some("19BBY".to_string()),
                gender: Some("male".to_string()),
            },
        }
    }

    /// Sets the name for the person.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the gender for the person.
    pub fn gender(mut self, gender: Option<&str>) -> Self {
        self.entity.gender = gender.map(str::to_string);
        self
    }

    /// Builds and inserts the person entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::people::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::people::Model, DbErr> {
        let e = self.entity;
        entity::people::ActiveModel {
            name: ActiveValue::Set(e.name),
            height: ActiveValue::Set(e.height),
            mass: ActiveValue::Set(e.mass),
            hair_color: ActiveValue::Set(e.hair_color),
            skin_color: ActiveValue::Set(e.skin_color),
            eye_color: ActiveValue::Set(e.eye_color),
            birth_year: ActiveValue::Set(e.birth_year),
            gender: ActiveValue::Set(e.gender),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::people::Model, DbErr> {
    PersonFactory::new(db).build().await
}
