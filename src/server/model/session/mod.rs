//! Typed wrappers for data kept in the tower-sessions session (Valkey-backed in production).

pub mod user;
