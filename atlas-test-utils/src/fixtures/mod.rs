//! Fixtures used while a test runs.
//!
//! - `country` - REST Countries records and mock endpoints
//! - `user` - `atlas_user` rows
//! - `favorite` - `atlas_favorite` rows

pub mod country;
pub mod favorite;
pub mod user;
