//! People data repository for database operations.

use crate::server::model::people::Person;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing read access to the people catalog.
pub struct PeopleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleRepository<'a> {
    /// Creates a new PeopleRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all people ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Person>)` - Every person in the catalog
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entities = entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    /// Finds a person by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - Person found
    /// - `Ok(None)` - No person with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::People::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Person::from_entity))
    }
}
