//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. Lookups of
//! missing rows yield `None`; interpreting the absence is left to the service layer.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
