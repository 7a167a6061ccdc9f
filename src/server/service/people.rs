use sea_orm::DatabaseConnection;

use crate::server::{data::people::PeopleRepository, error::AppError, model::people::Person};

/// Service providing read access to the people catalog.
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every person in the catalog.
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let people = PeopleRepository::new(self.db).get_all().await?;
        Ok(people)
    }

    /// Retrieves a person by ID.
    ///
    /// # Returns
    /// - `Ok(Person)` - The requested person
    /// - `Err(AppError::NotFound)` - No person with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Person, AppError> {
        PeopleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))
    }
}
