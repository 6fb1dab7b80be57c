//! `SeaORM` Entity definitions

pub mod prelude;

pub mod atlas_favorite;
pub mod atlas_user;
