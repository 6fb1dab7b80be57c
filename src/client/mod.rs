//! Headless client state layer.
//!
//! Everything a presentation layer needs to talk to the Atlas server without owning any
//! HTTP or persistence details:
//!
//! - [`api::ApiClient`] wraps the HTTP API, keeping the session cookie between calls.
//! - [`favorites::FavoritesSync`] keeps a locally persisted favorites cache in sync with
//!   the server using optimistic toggles that are reverted on failure.
//! - [`detail::CountryDetail`] holds the country shown in the detail view and drops
//!   responses that arrive after the user moved on.
//! - [`session::ClientSession`] ties them to a login.
//! - [`storage`] persists small JSON values, [`format`] renders values for display and
//!   [`labels`] holds the translated view text.

pub mod api;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod format;
pub mod labels;
pub mod session;
pub mod storage;
