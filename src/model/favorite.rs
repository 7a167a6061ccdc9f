use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of entity a favorite points at, serialized as a lowercase tag.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKindDto {
    People,
    Planet,
    Species,
    Starship,
    Vehicle,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKindDto,
    pub target_id: i32,
}

/// Body accepted by the favorite create & delete endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteRequestDto {
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteCreatedDto {
    pub msg: String,
    pub favorite_id: i32,
}
