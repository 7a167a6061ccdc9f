//! SeaORM entities for the holonet schema.

pub mod prelude;

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
