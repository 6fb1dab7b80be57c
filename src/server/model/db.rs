//! Database model type aliases.

/// Registered user, see [`entity::atlas_user::Model`].
pub type UserModel = entity::atlas_user::Model;
