use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
