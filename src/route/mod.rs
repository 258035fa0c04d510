pub mod profile;
pub mod web;
