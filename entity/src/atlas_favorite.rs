//! `SeaORM` Entity for favorite countries, keyed by (user, country code)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "atlas_favorite")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub country_code: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::atlas_user::Entity",
        from = "Column::UserId",
        to = "super::atlas_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AtlasUser,
}

impl Related<super::atlas_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AtlasUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
