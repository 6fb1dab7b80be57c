//! Server application core modules.
//!
//! The axum service behind the Atlas API: account and session handling, per-user
//! favorites stored through SeaORM and the normalizing passthrough to the REST
//! Countries API, plus serving the single-page application build.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
