pub mod get_user;
pub mod rejection;
