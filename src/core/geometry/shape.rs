//! Wave function and point sampling for the trail

use super::curve::CurvePath;
use super::point::Point;
use std::f64::consts::PI;
use std::iter::FusedIterator;

/// Horizontal displacement of the trail at `progress` (0 = top, 1 = bottom).
///
/// Two sine products averaged together. The result stays roughly within
/// `[-0.9, 0.9]` but is not clamped; the shape depends on the exact formula.
/// Lesson markers and the sampled path both go through this function so they
/// line up.
#[must_use]
pub fn wave_offset(progress: f64) -> f64 {
    let wave1 = (progress * PI * 2.0).sin() * (progress * PI).sin();
    let wave2 = (progress * PI * 1.5).sin() * (progress * PI * 0.5).cos();
    (wave1 + wave2) * 0.5
}

/// Clamp an extent to something drawable: negative, NaN and infinite become 0.
#[must_use]
pub fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

/// Fixed trail parameters: where the wave is centered, how far it swings,
/// and how many segments it is sampled with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathShape {
    center_x: f64,
    amplitude: f64,
    segments: usize,
}

impl PathShape {
    /// Horizontal center used by the tree view
    pub const DEFAULT_CENTER_X: f64 = 100.0;
    /// Maximum swing used by the tree view
    pub const DEFAULT_AMPLITUDE: f64 = 45.0;
    /// Sample count used by the tree view
    pub const DEFAULT_SEGMENTS: usize = 30;
    /// Largest accepted sample count
    pub const MAX_SEGMENTS: usize = 100_000;

    /// Create a trail shape
    ///
    /// # Errors
    /// Returns an error if `segments` is 0 or above [`Self::MAX_SEGMENTS`], or
    /// if `center_x` or `amplitude` is NaN or infinite.
    pub fn new(center_x: f64, amplitude: f64, segments: usize) -> Result<Self, String> {
        if segments == 0 {
            return Err("Trail needs at least 1 segment (got 0)".to_string());
        }
        if segments > Self::MAX_SEGMENTS {
            return Err(format!(
                "Trail allows at most {} segments (got {segments})",
                Self::MAX_SEGMENTS
            ));
        }
        if !center_x.is_finite() || !amplitude.is_finite() {
            return Err(format!(
                "Trail center and amplitude must be finite (got {center_x}, {amplitude})"
            ));
        }
        Ok(Self {
            center_x,
            amplitude,
            segments,
        })
    }

    /// Horizontal center of the wave
    #[must_use]
    pub const fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Maximum nominal swing either side of the center
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Number of curve segments (points are `segments + 1`)
    #[must_use]
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// Horizontal coordinate of the trail at `progress`
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn x_at(&self, progress: f64) -> f64 {
        self.center_x + wave_offset(progress) * self.amplitude
    }

    /// Point on the sampled trail at `progress` for a given extent
    #[must_use]
    pub fn point_at(&self, progress: f64, extent: f64) -> Point {
        Point::new(self.x_at(progress), sanitize_extent(extent) * progress)
    }

    /// Lazily sample the trail from `y = 0` down to `y = extent`
    #[must_use]
    pub fn points(&self, extent: f64) -> Points {
        Points {
            shape: *self,
            extent: sanitize_extent(extent),
            next: 0,
        }
    }

    /// Eagerly sample the trail
    #[must_use]
    pub fn sample(&self, extent: f64) -> Vec<Point> {
        self.points(extent).collect()
    }

    /// Sample the trail and join the samples with cubic segments
    #[must_use]
    pub fn curve(&self, extent: f64) -> CurvePath {
        CurvePath::through(self.sample(extent))
    }
}

impl Default for PathShape {
    fn default() -> Self {
        Self {
            center_x: Self::DEFAULT_CENTER_X,
            amplitude: Self::DEFAULT_AMPLITUDE,
            segments: Self::DEFAULT_SEGMENTS,
        }
    }
}

/// Iterator over the `segments + 1` sample points of a trail
#[derive(Debug, Clone)]
pub struct Points {
    shape: PathShape,
    extent: f64,
    next: usize,
}

impl Iterator for Points {
    type Item = Point;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Point> {
        if self.next > self.shape.segments {
            return None;
        }
        let progress = self.next as f64 / self.shape.segments as f64;
        self.next += 1;
        Some(self.shape.point_at(progress, self.extent))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.shape.segments.saturating_add(1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}

impl FusedIterator for Points {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_offset_is_zero_at_start() {
        assert!(wave_offset(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset_is_near_zero_at_end() {
        assert!(wave_offset(1.0).abs() < EPS);
    }

    #[test]
    fn test_offset_matches_formula_midway() {
        // sin(π)·sin(π/2) = 0, sin(0.75π)·cos(0.25π) = 0.5
        assert!((wave_offset(0.5) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_offset_is_deterministic() {
        for i in 0..=100 {
            let p = f64::from(i) / 100.0;
            assert_eq!(wave_offset(p).to_bits(), wave_offset(p).to_bits());
        }
    }

    #[test]
    fn test_zero_segments_rejected() {
        let err = PathShape::new(100.0, 45.0, 0).unwrap_err();
        assert!(err.contains("at least 1 segment"));
    }

    #[test]
    fn test_oversized_segments_rejected() {
        assert!(PathShape::new(100.0, 45.0, PathShape::MAX_SEGMENTS).is_ok());

        let err = PathShape::new(100.0, 45.0, PathShape::MAX_SEGMENTS + 1).unwrap_err();
        assert!(err.contains("at most"));
        assert!(PathShape::new(100.0, 45.0, usize::MAX).is_err());
    }

    #[test]
    fn test_non_finite_shape_rejected() {
        assert!(PathShape::new(f64::NAN, 45.0, 30).is_err());
        assert!(PathShape::new(100.0, f64::INFINITY, 30).is_err());
        assert!(PathShape::new(100.0, f64::NEG_INFINITY, 30).is_err());
    }

    #[test]
    fn test_default_shape() {
        let shape = PathShape::default();
        assert!((shape.center_x() - 100.0).abs() < f64::EPSILON);
        assert!((shape.amplitude() - 45.0).abs() < f64::EPSILON);
        assert_eq!(shape.segments(), 30);
    }

    #[test]
    fn test_point_count_and_endpoints() {
        let shape = PathShape::default();
        let points = shape.sample(800.0);

        assert_eq!(points.len(), 31);
        assert!((points[0].x - 100.0).abs() < f64::EPSILON);
        assert!(points[0].y.abs() < f64::EPSILON);
        assert!((points[30].x - 100.0).abs() < EPS);
        assert!((points[30].y - 800.0).abs() < EPS);
    }

    #[test]
    fn test_points_is_exact_size() {
        let shape = PathShape::new(0.0, 1.0, 7).unwrap();
        let mut points = shape.points(10.0);
        assert_eq!(points.len(), 8);
        points.next();
        assert_eq!(points.len(), 7);
        assert_eq!(points.by_ref().count(), 7);
        assert!(points.next().is_none());
    }

    #[test]
    fn test_x_stays_within_amplitude() {
        let shape = PathShape::new(100.0, 45.0, 200).unwrap();
        for point in shape.points(1000.0) {
            assert!(point.x >= 55.0 && point.x <= 145.0, "x out of range: {}", point.x);
        }
    }

    #[test]
    fn test_zero_extent_collapses_to_origin_row() {
        let shape = PathShape::default();
        let points = shape.sample(0.0);
        assert_eq!(points.len(), 31);
        assert!(points.iter().all(|p| p.y.abs() < f64::EPSILON));
    }

    #[test]
    fn test_bad_extents_are_treated_as_zero() {
        assert!(sanitize_extent(-5.0).abs() < f64::EPSILON);
        assert!(sanitize_extent(f64::NAN).abs() < f64::EPSILON);
        assert!(sanitize_extent(f64::INFINITY).abs() < f64::EPSILON);
        assert!((sanitize_extent(640.0) - 640.0).abs() < f64::EPSILON);

        let shape = PathShape::default();
        assert_eq!(shape.sample(f64::NAN), shape.sample(0.0));
        assert_eq!(shape.sample(-1.0), shape.sample(0.0));
    }

    #[test]
    fn test_point_at_uses_same_offset_as_samples() {
        let shape = PathShape::new(100.0, 45.0, 4).unwrap();
        let samples = shape.sample(400.0);
        assert_eq!(shape.point_at(0.25, 400.0), samples[1]);
        assert_eq!(shape.point_at(0.75, 400.0), samples[3]);
    }
}
