//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so they work both on a pooled connection and inside a transaction.

pub mod favorite;
pub mod user;
