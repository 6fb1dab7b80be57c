//! Test environments for the Atlas server.
//!
//! Tests configure a [`TestBuilder`] (tables, upstream endpoints), then work against the
//! resulting [`TestContext`]: an in-memory SQLite database, a mockito server standing in
//! for the REST Countries API, a country client pointed at it and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
