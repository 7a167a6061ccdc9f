use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}
