//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the exact JSON shape of request bodies and responses. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
