//! Domain & parameter models for favorite operations
//!
//! A favorite links a user to exactly one target entity. The target is modeled as a
//! tagged variant so a favorite can never point at zero or several entities at once.

use entity::favorite::TargetKind;

use crate::model::favorite::{FavoriteDto, FavoriteKindDto};

/// The entity a favorite points at, carrying its ID.
///
/// Only `Person` and `Planet` are reachable through the API; the remaining variants
/// exist in the schema without a backing catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
    Species(i32),
    Starship(i32),
    Vehicle(i32),
}

impl FavoriteTarget {
    /// Rebuilds a target from the stored `(target_kind, target_id)` pair.
    pub fn from_parts(kind: TargetKind, id: i32) -> Self {
        match kind {
            TargetKind::People => Self::Person(id),
            TargetKind::Planet => Self::Planet(id),
            TargetKind::Species => Self::Species(id),
            TargetKind::Starship => Self::Starship(id),
            TargetKind::Vehicle => Self::Vehicle(id),
        }
    }

    /// Stored kind tag of the target.
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Person(_) => TargetKind::People,
            Self::Planet(_) => TargetKind::Planet,
            Self::Species(_) => TargetKind::Species,
            Self::Starship(_) => TargetKind::Starship,
            Self::Vehicle(_) => TargetKind::Vehicle,
        }
    }

    /// ID of the favorited entity.
    pub fn id(&self) -> i32 {
        match *self {
            Self::Person(id)
            | Self::Planet(id)
            | Self::Species(id)
            | Self::Starship(id)
            | Self::Vehicle(id) => id,
        }
    }

    /// Capitalized singular name of the target kind used in API messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person(_) => "Person",
            Self::Planet(_) => "Planet",
            Self::Species(_) => "Species",
            Self::Starship(_) => "Starship",
            Self::Vehicle(_) => "Vehicle",
        }
    }

    fn kind_dto(&self) -> FavoriteKindDto {
        match self {
            Self::Person(_) => FavoriteKindDto::People,
            Self::Planet(_) => FavoriteKindDto::Planet,
            Self::Species(_) => FavoriteKindDto::Species,
            Self::Starship(_) => FavoriteKindDto::Starship,
            Self::Vehicle(_) => FavoriteKindDto::Vehicle,
        }
    }
}

/// The favorite domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to the favorite domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Favorite` - The converted favorite domain model
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            target: FavoriteTarget::from_parts(entity.target_kind, entity.target_id),
        }
    }

    /// Converts the favorite domain model into its DTO
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.target.kind_dto(),
            target_id: self.target.id(),
        }
    }
}

/// Parameters for adding a favorite to a user
#[derive(Debug, Clone)]
pub struct AddFavoriteParam {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Parameters for removing a favorite from a user
#[derive(Debug, Clone)]
pub struct RemoveFavoriteParam {
    pub user_id: i32,
    pub target: FavoriteTarget,
}
