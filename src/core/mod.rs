//! Core module for the learning tree

pub mod catalog;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod models;
pub mod routes;
pub mod site;

/// Returns the current version of the `learning-tree` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
