//! Static rendering of the learning tree
//!
//! Every output format implements [`PageRenderer`]; [`PageRenderer::write_site`]
//! walks the tree view, one page per lesson and the fallback page, writing each
//! under an output directory.

pub mod formats;
mod views;

use crate::core::catalog::Catalog;
use crate::core::geometry::PathShape;
use crate::core::layout::TreeLayout;
use crate::core::models::LessonContent;
use crate::core::routes::Route;
use logger::debug;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlRenderer, MarkdownRenderer, PageFormat, SvgRenderer};

/// Heading shown on the tree view
pub const TREE_TITLE: &str = "Learning Journey";

/// Data shared by every page of one rendering pass
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Lessons, contents and learner badges
    pub catalog: &'a Catalog,
    /// Trail and lesson markers
    pub layout: TreeLayout<'a>,
}

impl<'a> PageContext<'a> {
    /// Lay out `catalog` on a trail of the given shape and extent
    #[must_use]
    pub fn new(catalog: &'a Catalog, shape: &PathShape, extent: f64, marker_spread: f64) -> Self {
        Self {
            catalog,
            layout: TreeLayout::compute(&catalog.lessons, shape, extent, marker_spread),
        }
    }

    /// Every route the site has a page for, in output order
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = Vec::with_capacity(self.catalog.lesson_count() + 2);
        routes.push(Route::Tree);
        routes.extend(
            self.catalog
                .lessons
                .iter()
                .map(|lesson| Route::Lesson(lesson.id.clone())),
        );
        routes.push(Route::NotFound);
        routes
    }
}

/// A page output format
pub trait PageRenderer {
    /// Format produced by this renderer
    fn format(&self) -> PageFormat;

    /// Render the tree view
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render_tree(&self, ctx: &PageContext) -> Result<String, Box<dyn Error>>;

    /// Render one lesson's detail page
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render_lesson(
        &self,
        ctx: &PageContext,
        content: &LessonContent,
    ) -> Result<String, Box<dyn Error>>;

    /// Render the fallback page shown at `route`
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render_not_found(&self, ctx: &PageContext, route: &Route) -> Result<String, Box<dyn Error>>;

    /// Render whatever page `route` resolves to
    ///
    /// Lesson routes without content fall back to the not-found page.
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render_route(&self, ctx: &PageContext, route: &Route) -> Result<String, Box<dyn Error>> {
        match route {
            Route::Tree => self.render_tree(ctx),
            Route::Lesson(id) => match ctx.catalog.find_content(id) {
                Some(content) => self.render_lesson(ctx, content),
                None => {
                    debug!("No content for lesson '{id}', rendering fallback");
                    self.render_not_found(ctx, route)
                }
            },
            Route::NotFound => self.render_not_found(ctx, route),
        }
    }

    /// Write every page under `out_dir`, returning the written files
    ///
    /// # Errors
    /// Returns an error if a lesson id cannot be used as a file name, a page
    /// fails to render, or a file cannot be written
    fn write_site(&self, ctx: &PageContext, out_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let extension = self.format().extension();
        let routes = ctx.routes();
        if let Some(Route::Lesson(id)) = routes
            .iter()
            .find(|r| matches!(r, Route::Lesson(id) if !Route::is_valid_id(id)))
        {
            return Err(format!("Invalid lesson id: '{id}'").into());
        }
        let mut written = Vec::with_capacity(routes.len());

        for route in &routes {
            let path = out_dir.join(route.file_name(extension));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, self.render_route(ctx, route)?)?;
            debug!("Wrote {route} to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
