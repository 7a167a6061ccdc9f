//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::planet::Model,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::planet::Model {
                id: 0,
                name: format!("Planet {}", next_id()),
                diameter: Some("10465".to_string()),
                rotation_period: Some("23".to_string()),
                orbital_period: Some("304".to_string()),
                gravity: Some("1 standard".to_string()),
                population: Some("200000".to_string()),
                climate: Some("arid".to_string()),
                terrain: Some("desert".to_string()),
                surface_water: Some("1".to_string()),
            },
        }
    }

    /// Sets the name for the planet.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the climate for the planet.
    pub fn climate(mut self, climate: Option<&str>) -> Self {
        self.entity.climate = climate.map(str::to_string);
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        let e = self.entity;
        entity::planet::ActiveModel {
            name: ActiveValue::Set(e.name),
            diameter: ActiveValue::Set(e.diameter),
            rotation_period: ActiveValue::Set(e.rotation_period),
            orbital_period: ActiveValue::Set(e.orbital_period),
            gravity: ActiveValue::Set(e.gravity),
            population: ActiveValue::Set(e.population),
            climate: ActiveValue::Set(e.climate),
            terrain: ActiveValue::Set(e.terrain),
            surface_water: ActiveValue::Set(e.surface_water),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
