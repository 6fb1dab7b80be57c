//! HTTP controller endpoints for the Atlas API.
//!
//! Handlers extract and validate inputs, resolve the session user where required, call
//! into the services and map the results to responses. Every API handler carries a
//! utoipa annotation so it shows up in the generated OpenAPI document.

pub mod auth;
pub mod country;
pub mod favorite;
pub mod spa;
pub mod util;
