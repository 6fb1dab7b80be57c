//! Placeholder values shared by test fixtures.

/// User agent of the test country client.
pub static TEST_USER_AGENT: &str = "atlas-test/0.1 (test@example.com)";

/// Stored hash of users inserted directly into the database.
///
/// Not a valid PHC string. Tests that log in go through registration instead.
pub static TEST_PASSWORD_HASH: &str = "not-a-password-hash";
