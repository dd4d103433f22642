//! Render command handler
//!
//! Writes the tree view, every lesson page and the not-found page in one
//! format.

use super::resolve_catalog;
use learning_tree::config::Config;
use learning_tree::core::site::{PageContext, PageFormat};
use logger::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// # Arguments
/// * `config` - Configuration with layout, catalog and site directory
/// * `format_str` - Page format (html, svg, markdown)
/// * `catalog_path` - Catalog file overriding the configured one
/// * `output` - Directory overriding the configured site directory
///
/// # Errors
/// Returns a printable message if any step fails.
pub fn run(
    config: &Config,
    format_str: &str,
    catalog_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), String> {
    let format = PageFormat::from_str(format_str).map_err(|e| {
        error!("{e}");
        format!("✗ {e}. Supported formats: html, svg, markdown")
    })?;

    let shape = config.layout.shape().map_err(|e| {
        error!("{e}");
        format!("✗ {e}")
    })?;

    let catalog = resolve_catalog(config, catalog_path)?;

    let out_dir = output.map_or_else(|| PathBuf::from(&config.paths.site_dir), Path::to_path_buf);
    if out_dir.as_os_str().is_empty() {
        return Err("✗ No output directory: pass -o DIR or set site_dir".to_string());
    }

    let ctx = PageContext::new(
        &catalog,
        &shape,
        config.layout.extent,
        config.layout.marker_spread,
    );
    verbose!(
        "Rendering {} lessons as {format} (extent {})",
        catalog.lesson_count(),
        ctx.layout.extent
    );

    let written = format.renderer().write_site(&ctx, &out_dir).map_err(|e| {
        error!("Failed to render site into {}: {e}", out_dir.display());
        format!("✗ Failed to render site into {}: {e}", out_dir.display())
    })?;

    for path in &written {
        verbose!("  {}", path.display());
    }
    info!("Rendered {} pages to {}", written.len(), out_dir.display());
    println!("✓ Site written: {} ({} pages)", out_dir.display(), written.len());
    Ok(())
}
