//! `SeaORM` Entity prelude

pub use super::atlas_favorite::Entity as AtlasFavorite;
pub use super::atlas_user::Entity as AtlasUser;
