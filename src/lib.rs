//! Shared library for `learningtree`
//!
//! Trail geometry, the lesson catalog, marker layout, routing and static page
//! rendering. The CLI in `src/cli` is a thin layer over these modules.

pub mod core;

pub use self::core::config;
pub use self::core::get_version;
