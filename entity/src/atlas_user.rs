//! `SeaORM` Entity for registered users

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "atlas_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::atlas_favorite::Entity")]
    AtlasFavorite,
}

impl Related<super::atlas_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AtlasFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
