//! HTML page renderer
//!
//! Pages are self-contained apart from the icon font. The tree view draws the
//! trail twice from the same path data: a wide blurred glow underneath and a
//! thin gradient line on top.

use super::PageFormat;
use crate::core::geometry::format_coord;
use crate::core::layout::RING_CIRCUMFERENCE;
use crate::core::models::LessonContent;
use crate::core::routes::Route;
use crate::core::site::views::{DotView, MarkerView};
use crate::core::site::{PageContext, PageRenderer, TREE_TITLE};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "html/tree.html")]
struct TreeTemplate<'a> {
    title: &'a str,
    total_xp: u32,
    membership: &'a str,
    path_d: String,
    width: String,
    height: String,
    ring_circumference: f64,
    trail_ends: Vec<DotView>,
    nodes: Vec<MarkerView<'a>>,
}

/// A link to another lesson page
struct LinkView<'a> {
    label: &'a str,
    href: String,
}

#[derive(Template)]
#[template(path = "html/lesson.html")]
struct LessonTemplate<'a> {
    root: &'a str,
    content: &'a LessonContent,
    progress: u8,
    prerequisites: Vec<LinkView<'a>>,
}

#[derive(Template)]
#[template(path = "html/not_found.html")]
struct NotFoundTemplate<'a> {
    root: &'a str,
}

/// HTML renderer backed by askama templates
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for HtmlRenderer {
    fn format(&self) -> PageFormat {
        PageFormat::Html
    }

    fn render_tree(&self, ctx: &PageContext) -> Result<String, Box<dyn Error>> {
        let extension = self.format().extension();
        let template = TreeTemplate {
            title: TREE_TITLE,
            total_xp: ctx.catalog.learner.total_xp,
            membership: &ctx.catalog.learner.membership,
            path_d: ctx.layout.curve.to_svg_d(),
            width: format_coord(ctx.layout.width()),
            height: format_coord(ctx.layout.extent),
            ring_circumference: RING_CIRCUMFERENCE,
            trail_ends: DotView::trail_ends(&ctx.layout.curve),
            nodes: MarkerView::all(&ctx.layout.markers, extension),
        };
        Ok(template.render()?)
    }

    fn render_lesson(
        &self,
        ctx: &PageContext,
        content: &LessonContent,
    ) -> Result<String, Box<dyn Error>> {
        let extension = self.format().extension();
        // Sibling pages live in the same directory.
        let prerequisites = content
            .prerequisites
            .iter()
            .map(|id| LinkView {
                label: ctx
                    .catalog
                    .find_lesson(id)
                    .map_or(id.as_str(), |l| l.title.as_str()),
                href: format!("{id}.{extension}"),
            })
            .collect();

        let template = LessonTemplate {
            root: Route::Lesson(content.id.clone()).root_prefix(),
            content,
            progress: content.progress_percent(),
            prerequisites,
        };
        Ok(template.render()?)
    }

    fn render_not_found(&self, _ctx: &PageContext, route: &Route) -> Result<String, Box<dyn Error>> {
        let template = NotFoundTemplate {
            root: route.root_prefix(),
        };
        Ok(template.render()?)
    }
}
