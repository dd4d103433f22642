//! Path command handler
//!
//! Prints the SVG path data for the configured trail shape.

use learning_tree::config::Config;
use learning_tree::core::geometry::sanitize_extent;
use logger::{error, verbose, warn};

/// Run the path command.
///
/// # Arguments
/// * `config` - Configuration holding the trail layout
/// * `extent` - Vertical span overriding the configured one
/// * `show_points` - Also print the sample points
///
/// # Errors
/// Returns a printable message if the configured shape is invalid.
pub fn run(config: &Config, extent: Option<f64>, show_points: bool) -> Result<(), String> {
    let shape = config.layout.shape().map_err(|e| {
        error!("{e}");
        format!("✗ {e}")
    })?;

    let requested = extent.unwrap_or(config.layout.extent);
    let extent = sanitize_extent(requested);
    if extent.to_bits() != requested.to_bits() {
        warn!("Extent {requested} is not usable, drawing a flat trail instead");
    }

    let curve = shape.curve(extent);
    verbose!(
        "Trail: center_x={} amplitude={} segments={} extent={extent}",
        shape.center_x(),
        shape.amplitude(),
        shape.segments()
    );

    println!("{curve}");

    if show_points {
        for (idx, point) in curve.points().iter().enumerate() {
            println!("{idx:>3}: {point}");
        }
    }

    Ok(())
}
