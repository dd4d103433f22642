//! Cubic Bézier serialization of a sampled trail

use super::point::Point;
use std::fmt;

/// One SVG path-data instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `C x1 y1, x2 y2, x y`
    CubicTo {
        /// First control point
        ctrl1: Point,
        /// Second control point
        ctrl2: Point,
        /// End point of the segment
        to: Point,
    },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {p}"),
            Self::CubicTo { ctrl1, ctrl2, to } => write!(f, "C {ctrl1}, {ctrl2}, {to}"),
        }
    }
}

/// A smooth curve passing through every sample point
///
/// Each control point shares the height of its endpoint and sits a quarter of
/// the way across the segment, so every segment leaves and enters its samples
/// horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    points: Vec<Point>,
    commands: Vec<PathCommand>,
}

impl CurvePath {
    /// Build the curve through `points` in order
    #[must_use]
    pub fn through(points: Vec<Point>) -> Self {
        let mut commands = Vec::with_capacity(points.len());

        if let Some(first) = points.first() {
            commands.push(PathCommand::MoveTo(*first));
        }

        for pair in points.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let mid = current.midpoint(next);
            commands.push(PathCommand::CubicTo {
                ctrl1: Point::new(current.x + (mid.x - current.x) / 2.0, current.y),
                ctrl2: Point::new(next.x - (next.x - mid.x) / 2.0, next.y),
                to: next,
            });
        }

        Self { points, commands }
    }

    /// Sample points the curve passes through
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Drawing instructions in order
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of cubic segments
    #[must_use]
    pub fn cubic_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count()
    }

    /// SVG `d` attribute value
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
