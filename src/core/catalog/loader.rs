//! TOML catalog files
//!
//! A catalog file replaces the built-in lessons:
//!
//! ```toml
//! [learner]
//! total_xp = 120
//! membership = "Free"
//!
//! [[lessons]]
//! id = "1"
//! title = "Getting Started"
//! icon = "fa-robot"
//! color = "from-emerald-400 to-teal-400"
//! unlocked = true
//! xp = 50
//! completion_percentage = 100
//!
//! [[contents]]
//! id = "1"
//! title = "Getting Started"
//! content = "Welcome!"
//! xp_points = 50
//! estimated_time = "10 mins"
//! difficulty = "Beginner"
//! ```

use super::Catalog;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog from TOML text and validate it
///
/// # Errors
/// Returns an error if the text is not valid TOML, does not match the catalog
/// schema, or fails [`Catalog::validate`].
pub fn parse_catalog(toml_str: &str) -> Result<Catalog, Box<dyn Error>> {
    let catalog: Catalog = toml::from_str(toml_str)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Read and parse a catalog file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}
