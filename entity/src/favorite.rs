use sea_orm::entity::prelude::*;

/// Kind of entity a favorite points at.
///
/// Stored as a short string tag alongside `target_id`. Only `People` and `Planet`
/// have catalog tables today.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TargetKind {
    #[sea_orm(string_value = "people")]
    People,
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "species")]
    Species,
    #[sea_orm(string_value = "starship")]
    Starship,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub target_kind: TargetKind,
    pub target_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
