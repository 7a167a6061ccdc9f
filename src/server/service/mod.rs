//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and duplicate prevention
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows and constraint violations into `AppError`

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
