//! Handler tests, calling each controller function directly with test state.

mod auth;
mod country;
mod favorite;

use atlas_test_utils::prelude::*;

use crate::util::{body_json, into_response};
