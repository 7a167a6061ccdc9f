use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Planet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table has been created.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the favorite table together with its `(user_id, target_kind, target_id)`
    /// unique index.
    ///
    /// The index mirrors the one created by the `migration` crate so tests observe the
    /// same duplicate rejection as production. The user table must already be added.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_favorite_table(mut self) -> Self {
        self = self.with_table(Favorite);
        self.indexes.push(
            Index::create()
                .name("idx_favorite_user_target")
                .table(Favorite)
                .col(entity::favorite::Column::UserId)
                .col(entity::favorite::Column::TargetKind)
                .col(entity::favorite::Column::TargetId)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Adds every table of the schema in dependency order:
    /// - User
    /// - People
    /// - Planet
    /// - Favorite (with its unique index)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(People)
            .with_table(Planet)
            .with_favorite_table()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by the CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
