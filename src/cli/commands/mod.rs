//! CLI command handlers for `learningtree`.
//!
//! Each command is implemented in its own submodule. Handlers log failures
//! and hand back a ready-to-print `✗ ...` message.

pub mod config;
pub mod lesson;
pub mod path;
pub mod render;

use learning_tree::config::Config;
use learning_tree::core::catalog::{load_catalog, Catalog};
use logger::{error, info};
use std::path::Path;

/// Load the catalog named on the command line, else the configured one, else
/// the built-in lessons
fn resolve_catalog(config: &Config, cli_path: Option<&Path>) -> Result<Catalog, String> {
    let path = cli_path.or_else(|| {
        (!config.paths.catalog.is_empty()).then(|| Path::new(config.paths.catalog.as_str()))
    });

    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let catalog = load_catalog(path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ Failed to load catalog {}: {e}", path.display())
    })?;
    info!(
        "Catalog loaded: {} ({} lessons)",
        path.display(),
        catalog.lesson_count()
    );
    Ok(catalog)
}
