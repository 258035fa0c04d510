pub mod common;
pub mod profile;
