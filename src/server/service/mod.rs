//! Business logic services.
//!
//! Services coordinate repositories and the country data source, converting their
//! results into the DTOs and domain errors the controllers return.

pub mod auth;
pub mod country;
pub mod favorite;
