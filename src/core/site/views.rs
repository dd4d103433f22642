//! Flattened marker data handed to templates

use crate::core::geometry::{format_coord, CurvePath};
use crate::core::layout::Marker;
use crate::core::routes::Route;

/// One lesson node, with every value already formatted
pub(crate) struct MarkerView<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) icon: &'a str,
    pub(crate) color: &'a str,
    pub(crate) xp: u32,
    pub(crate) description: &'a str,
    pub(crate) href: Option<String>,
    pub(crate) x: String,
    pub(crate) y: String,
    pub(crate) translate_x: String,
    pub(crate) ring_dash: Option<String>,
    pub(crate) locked: bool,
    pub(crate) status_label: String,
    pub(crate) status_icon: &'static str,
    pub(crate) status_slug: &'static str,
}

impl<'a> MarkerView<'a> {
    pub(crate) fn new(marker: &Marker<'a>, extension: &str) -> Self {
        let lesson = marker.lesson;
        Self {
            id: &lesson.id,
            title: &lesson.title,
            icon: &lesson.icon,
            color: &lesson.color,
            xp: lesson.xp,
            description: lesson.description.as_deref().unwrap_or(""),
            href: marker
                .is_navigable()
                .then(|| Route::lesson_href(&lesson.id, extension)),
            x: format_coord(marker.anchor.x),
            y: format_coord(marker.anchor.y),
            translate_x: format_coord(marker.translate_x),
            ring_dash: marker.ring().map(format_coord),
            locked: !lesson.unlocked,
            status_label: marker.status.to_string(),
            status_icon: marker.status.icon(),
            status_slug: marker.status.slug(),
        }
    }

    pub(crate) fn all(markers: &[Marker<'a>], extension: &str) -> Vec<Self> {
        markers.iter().map(|m| Self::new(m, extension)).collect()
    }
}

/// A glowing dot marking one end of the trail
pub(crate) struct DotView {
    pub(crate) x: String,
    pub(crate) y: String,
}

impl DotView {
    /// Dots at the first and last sampled points of the trail
    pub(crate) fn trail_ends(curve: &CurvePath) -> Vec<Self> {
        let points = curve.points();
        points
            .first()
            .into_iter()
            .chain(points.last().filter(|_| points.len() > 1))
            .map(|p| Self {
                x: format_coord(p.x),
                y: format_coord(p.y),
            })
            .collect()
    }
}
