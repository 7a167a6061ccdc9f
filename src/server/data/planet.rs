//! Planet data repository for database operations.

use crate::server::model::planet::Planet;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing read access to the planet catalog.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by ID, returning `None` when it does not exist.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }
}
