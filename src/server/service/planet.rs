use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

/// Service providing read access to the planet catalog.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet in the catalog.
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let planets = PlanetRepository::new(self.db).get_all().await?;
        Ok(planets)
    }

    /// Retrieves a planet by ID, failing with `AppError::NotFound` when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }
}
