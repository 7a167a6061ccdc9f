use crate::model::planet::PlanetDto;

/// Planet catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
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

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            gravity: self.gravity,
            population: self.population,
            climate: self.climate,
            terrain: self.terrain,
            surface_water: self.surface_water,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            diameter: entity.diameter,
            rotation_period: entity.rotation_period,
            orbital_period: entity.orbital_period,
            gravity: entity.gravity,
            population: entity.population,
            climate: entity.climate,
            terrain: entity.terrain,
            surface_water: entity.surface_water,
        }
    }
}
