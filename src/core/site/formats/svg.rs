//! Standalone SVG renderer
//!
//! Each page is a single SVG document. Lesson nodes sit directly on the
//! trail, so the drawing needs no surrounding page layout.

use super::PageFormat;
use crate::core::geometry::format_coord;
use crate::core::layout::RING_CIRCUMFERENCE;
use crate::core::models::LessonContent;
use crate::core::routes::Route;
use crate::core::site::views::{DotView, MarkerView};
use crate::core::site::{PageContext, PageRenderer, TREE_TITLE};
use askama::Template;
use std::error::Error;

/// Room around the trail for the header and node labels
const MARGIN_TOP: f64 = 80.0;
const MARGIN_SIDE: f64 = 40.0;
const LABEL_WIDTH: f64 = 260.0;

const BAR_WIDTH: f64 = 656.0;
const LESSON_HEADER_HEIGHT: usize = 260;
const SECTION_HEIGHT: usize = 70;

#[derive(Template)]
#[template(path = "svg/tree.svg")]
struct TreeTemplate<'a> {
    title: &'a str,
    total_xp: u32,
    membership: &'a str,
    path_d: String,
    view_box: String,
    ring_circumference: f64,
    trail_ends: Vec<DotView>,
    nodes: Vec<MarkerView<'a>>,
}

#[derive(Template)]
#[template(path = "svg/lesson.svg")]
struct LessonTemplate<'a> {
    root: &'a str,
    extension: &'a str,
    content: &'a LessonContent,
    height: usize,
    bar_width: String,
}

#[derive(Template)]
#[template(path = "svg/not_found.svg")]
struct NotFoundTemplate<'a> {
    root: &'a str,
    extension: &'a str,
}

/// SVG renderer backed by askama templates
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create a new SVG renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn view_box(width: f64, height: f64) -> String {
    format!(
        "{} {} {} {}",
        format_coord(-MARGIN_SIDE),
        format_coord(-MARGIN_TOP),
        format_coord(width + 2.0 * MARGIN_SIDE + LABEL_WIDTH),
        format_coord(height + 2.0 * MARGIN_TOP),
    )
}

impl PageRenderer for SvgRenderer {
    fn format(&self) -> PageFormat {
        PageFormat::Svg
    }

    fn render_tree(&self, ctx: &PageContext) -> Result<String, Box<dyn Error>> {
        let template = TreeTemplate {
            title: TREE_TITLE,
            total_xp: ctx.catalog.learner.total_xp,
            membership: &ctx.catalog.learner.membership,
            path_d: ctx.layout.curve.to_svg_d(),
            view_box: view_box(ctx.layout.width(), ctx.layout.extent),
            ring_circumference: RING_CIRCUMFERENCE,
            trail_ends: DotView::trail_ends(&ctx.layout.curve),
            nodes: MarkerView::all(&ctx.layout.markers, self.format().extension()),
        };
        Ok(template.render()?)
    }

    fn render_lesson(
        &self,
        _ctx: &PageContext,
        content: &LessonContent,
    ) -> Result<String, Box<dyn Error>> {
        let template = LessonTemplate {
            root: Route::Lesson(content.id.clone()).root_prefix(),
            extension: self.format().extension(),
            content,
            height: LESSON_HEADER_HEIGHT + content.sections.len() * SECTION_HEIGHT,
            bar_width: format_coord(BAR_WIDTH * f64::from(content.progress_percent()) / 100.0),
        };
        Ok(template.render()?)
    }

    fn render_not_found(&self, _ctx: &PageContext, route: &Route) -> Result<String, Box<dyn Error>> {
        let template = NotFoundTemplate {
            root: route.root_prefix(),
            extension: self.format().extension(),
        };
        Ok(template.render()?)
    }
}
