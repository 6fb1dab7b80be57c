//! Atlas: a country explorer.
//!
//! - [`model`] holds the DTOs and validated inputs shared by both sides of the HTTP API.
//! - `server` is the axum service: authentication, per-user favorites and a normalizing
//!   passthrough to the REST Countries API.
//! - `client` is the headless state layer a presentation layer builds on: the locally
//!   persisted favorites cache kept in sync with the server and the stale-response
//!   guarded country detail holder.

pub mod model;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;
