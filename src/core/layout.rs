//! Placement of lesson markers along the trail
//!
//! Lesson `i` of `n` sits at progress `(i + 1) / n`. Its node is shifted
//! sideways by the same [`wave_offset`] that bends the trail, scaled by a
//! marker spread, so the nodes follow the curve.

use crate::core::geometry::{sanitize_extent, wave_offset, CurvePath, PathShape, Point};
use crate::core::models::{Lesson, LessonStatus};

/// Default horizontal scale for marker offsets (twice the default amplitude)
pub const DEFAULT_MARKER_SPREAD: f64 = 90.0;

/// Circumference of the progress ring drawn around a node
pub const RING_CIRCUMFERENCE: f64 = 282.7;

const RING_DASH_PER_PERCENT: f64 = 2.827;

/// Progress fraction of the lesson at `index` among `count` lessons
///
/// Returns 0 for an empty path.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn marker_progress(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index + 1) as f64 / count as f64
}

/// Stroke dash length for a ring filled to `percent`
#[must_use]
pub fn ring_dash(percent: u8) -> f64 {
    f64::from(percent) * RING_DASH_PER_PERCENT
}

/// A lesson positioned on the trail
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<'a> {
    /// Lesson shown at this marker
    pub lesson: &'a Lesson,
    /// Position in path order
    pub index: usize,
    /// Progress fraction along the trail
    pub progress: f64,
    /// Horizontal shift of the node relative to the column center
    pub translate_x: f64,
    /// Point on the sampled trail at this progress
    pub anchor: Point,
    /// Status shown on the info card
    pub status: LessonStatus,
}

impl Marker<'_> {
    /// Dash length of the progress ring, if the ring is drawn
    ///
    /// Rings are only drawn for unlocked lessons with a known completion.
    #[must_use]
    pub fn ring(&self) -> Option<f64> {
        if !self.lesson.unlocked {
            return None;
        }
        self.lesson.completion_percentage.map(ring_dash)
    }

    /// Whether the node links to its lesson page
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.lesson.unlocked
    }
}

/// The trail curve and every lesson marker for one extent
#[derive(Debug, Clone)]
pub struct TreeLayout<'a> {
    /// Vertical span the trail covers
    pub extent: f64,
    /// Shape the trail was sampled with
    pub shape: PathShape,
    /// Sampled trail
    pub curve: CurvePath,
    /// Lessons in path order
    pub markers: Vec<Marker<'a>>,
}

impl<'a> TreeLayout<'a> {
    /// Lay out `lessons` along a trail spanning `extent`
    #[must_use]
    pub fn compute(lessons: &'a [Lesson], shape: &PathShape, extent: f64, spread: f64) -> Self {
        let extent = sanitize_extent(extent);
        let count = lessons.len();
        let markers = lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| {
                let progress = marker_progress(index, count);
                Marker {
                    lesson,
                    index,
                    progress,
                    translate_x: wave_offset(progress) * spread,
                    anchor: shape.point_at(progress, extent),
                    status: lesson.status(),
                }
            })
            .collect();

        Self {
            extent,
            shape: *shape,
            curve: shape.curve(extent),
            markers,
        }
    }

    /// Width of the drawing area (the wave is centered in it)
    #[must_use]
    pub fn width(&self) -> f64 {
        self.shape.center_x() * 2.0
    }
}
