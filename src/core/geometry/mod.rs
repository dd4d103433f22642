//! Geometry of the winding trail drawn behind the lesson nodes
//!
//! The trail is a closed-form wave: [`wave_offset`] maps a progress fraction to a
//! horizontal displacement, [`PathShape`] samples it over a vertical extent, and
//! [`CurvePath`] joins the samples with cubic Bézier segments for SVG output.

pub mod curve;
pub mod point;
pub mod shape;

pub use curve::{CurvePath, PathCommand};
pub use point::{format_coord, Point};
pub use shape::{sanitize_extent, wave_offset, PathShape, Points};
