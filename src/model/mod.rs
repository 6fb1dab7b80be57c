//! Data transfer objects shared by the server and the client.

pub mod api;
pub mod country;
pub mod favorite;
pub mod input;
pub mod user;
