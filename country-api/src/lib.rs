//! Async client for the REST Countries v3.1 API.
//!
//! The upstream is treated as a read-only data source whose record shape is loose: any
//! field can be missing or `null` depending on the country. [`model::Country`] mirrors
//! that by making every field optional, leaving normalization to the caller.
//!
//! ```ignore
//! let client = country_api::Client::builder()
//!     .user_agent("atlas/0.1 (admin@example.com)")
//!     .build()?;
//!
//! let matches = client.country_by_code("FRA").await?;
//! ```

pub mod client;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::Error;
