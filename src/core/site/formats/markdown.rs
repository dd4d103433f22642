//! Markdown renderer
//!
//! Pages read well on GitHub or in an editor preview. The tree view becomes a
//! lesson table; the trail itself is kept as raw path data.

use super::PageFormat;
use crate::core::geometry::format_coord;
use crate::core::layout::Marker;
use crate::core::models::LessonContent;
use crate::core::routes::Route;
use crate::core::site::{PageContext, PageRenderer, TREE_TITLE};
use std::error::Error;
use std::fmt::Write;

const TREE_TEMPLATE: &str = include_str!("../templates/md/tree.md");
const LESSON_TEMPLATE: &str = include_str!("../templates/md/lesson.md");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/md/not_found.md");

/// Markdown renderer using template substitution
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate one table row per lesson
    fn generate_lesson_table(markers: &[Marker], extension: &str) -> String {
        let mut table = String::new();

        for marker in markers {
            let lesson = marker.lesson;
            let title = if marker.is_navigable() {
                format!(
                    "[{}]({})",
                    lesson.title,
                    Route::lesson_href(&lesson.id, extension)
                )
            } else {
                format!("🔒 {}", lesson.title)
            };
            let _ = writeln!(
                table,
                "| {} | {title} | {} | {} |",
                marker.index + 1,
                lesson.xp,
                marker.status
            );
        }

        table
    }

    /// Generate the numbered section list
    fn generate_sections(content: &LessonContent) -> String {
        let mut out = String::new();
        for (idx, section) in content.sections.iter().enumerate() {
            let _ = write!(out, "\n## #{} {}\n\n{}\n", idx + 1, section.title, section.content);
        }
        out
    }

    /// Generate links to prerequisite lessons, if any
    fn generate_prerequisites(ctx: &PageContext, content: &LessonContent, extension: &str) -> String {
        if content.prerequisites.is_empty() {
            return String::new();
        }

        let links: Vec<String> = content
            .prerequisites
            .iter()
            .map(|id| {
                let label = ctx
                    .catalog
                    .find_lesson(id)
                    .map_or(id.as_str(), |l| l.title.as_str());
                format!("[{label}]({id}.{extension})")
            })
            .collect();

        format!("\nBefore this lesson: {}\n", links.join(", "))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for MarkdownRenderer {
    fn format(&self) -> PageFormat {
        PageFormat::Markdown
    }

    fn render_tree(&self, ctx: &PageContext) -> Result<String, Box<dyn Error>> {
        let extension = self.format().extension();
        let learner = &ctx.catalog.learner;
        let membership = if learner.membership.is_empty() {
            String::new()
        } else {
            format!(" · 👑 {}", learner.membership)
        };
        let total_xp = learner.total_xp.to_string();
        let lesson_table = Self::generate_lesson_table(&ctx.layout.markers, extension);
        let width = format_coord(ctx.layout.width());
        let height = format_coord(ctx.layout.extent);
        let path_d = ctx.layout.curve.to_svg_d();

        Ok(fill_template(
            TREE_TEMPLATE,
            &[
                ("title", TREE_TITLE),
                ("total_xp", &total_xp),
                ("membership", &membership),
                ("lesson_table", &lesson_table),
                ("width", &width),
                ("height", &height),
                ("path_d", &path_d),
            ],
        ))
    }

    fn render_lesson(
        &self,
        ctx: &PageContext,
        content: &LessonContent,
    ) -> Result<String, Box<dyn Error>> {
        let extension = self.format().extension();
        let root = Route::Lesson(content.id.clone()).root_prefix();
        let xp_points = content.xp_points.to_string();
        let difficulty = content.difficulty.to_string();
        let progress = content.progress_percent().to_string();
        let sections = Self::generate_sections(content);
        let prerequisites = Self::generate_prerequisites(ctx, content, extension);

        Ok(fill_template(
            LESSON_TEMPLATE,
            &[
                ("root", root),
                ("title", &content.title),
                ("xp_points", &xp_points),
                ("estimated_time", &content.estimated_time),
                ("difficulty", &difficulty),
                ("progress", &progress),
                ("content", &content.content),
                ("sections", &sections),
                ("prerequisites", &prerequisites),
            ],
        ))
    }

    fn render_not_found(&self, _ctx: &PageContext, route: &Route) -> Result<String, Box<dyn Error>> {
        Ok(fill_template(
            NOT_FOUND_TEMPLATE,
            &[("root", route.root_prefix())],
        ))
    }
}

/// Substitute `{{name}}` placeholders in a single pass
///
/// Inserted values are never rescanned, so lesson text may contain `{{...}}`
/// literally. Unknown placeholders are left as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let found = after.find("}}").and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match found {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::geometry::PathShape;
    use crate::core::layout::DEFAULT_MARKER_SPREAD;

    fn context(catalog: &Catalog) -> PageContext<'_> {
        PageContext::new(catalog, &PathShape::default(), 800.0, DEFAULT_MARKER_SPREAD)
    }

    #[test]
    fn test_tree_table() {
        let catalog = Catalog::builtin();
        let ctx = context(&catalog);
        let md = MarkdownRenderer::new().render_tree(&ctx).unwrap();

        assert!(md.starts_with("# Learning Journey"));
        assert!(md.contains("Total XP: 275 · 👑 VIP Member"));
        assert!(md.contains("| 1 | [Getting Started](lesson/1.md) | 50 | Completed |"));
        assert!(md.contains("| 2 | [Basic Concepts](lesson/2.md) | 75 | In Progress - 60% |"));
        assert!(md.contains("| 4 | 🔒 Advanced Topics | 150 | Required XP: 225 |"));
        assert!(md.contains(&ctx.layout.curve.to_svg_d()));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_lesson_page() {
        let catalog = Catalog::builtin();
        let ctx = context(&catalog);
        let content = catalog.find_content("1").unwrap();
        let md = MarkdownRenderer::new().render_lesson(&ctx, content).unwrap();

        assert!(md.starts_with("[← Back to Tree](../index.md)"));
        assert!(md.contains("# Getting Started"));
        assert!(md.contains("**50 XP** · 10 mins · Beginner"));
        assert!(md.contains("## #2 Platform Overview"));
        assert!(md.contains("you'll be ready"));
        assert!(!md.contains("Before this lesson"));
    }

    #[test]
    fn test_prerequisite_links() {
        let mut catalog = Catalog::builtin();
        let mut content = catalog.find_content("3").unwrap().clone();
        content.prerequisites = vec!["1".to_string(), "2".to_string()];
        catalog.add_content(content);

        let ctx = context(&catalog);
        let content = catalog.find_content("3").unwrap();
        let md = MarkdownRenderer::new().render_lesson(&ctx, content).unwrap();

        assert!(md.contains("Before this lesson: [Getting Started](1.md), [Basic Concepts](2.md)"));
    }

    #[test]
    fn test_fill_template_is_single_pass() {
        let out = fill_template(
            "{{a}} and {{b}} and {{missing}}",
            &[("a", "{{b}}"), ("b", "two")],
        );
        assert_eq!(out, "{{b}} and two and {{missing}}");
    }

    #[test]
    fn test_placeholder_text_in_lesson_is_kept() {
        let mut catalog = Catalog::builtin();
        let mut content = catalog.find_content("2").unwrap().clone();
        content.title = "Learn the {{content}} syntax".to_string();
        content.content = "Body text with {{title}} inside".to_string();
        catalog.add_content(content);

        let ctx = context(&catalog);
        let content = catalog.find_content("2").unwrap();
        let md = MarkdownRenderer::new().render_lesson(&ctx, content).unwrap();

        assert!(md.contains("# Learn the {{content}} syntax"));
        assert!(md.contains("Body text with {{title}} inside"));
    }

    #[test]
    fn test_not_found_links_home() {
        let catalog = Catalog::builtin();
        let ctx = context(&catalog);
        let md = MarkdownRenderer::new()
            .render_not_found(&ctx, &Route::Lesson("x".to_string()))
            .unwrap();
        assert!(md.contains("[Return to Learning Tree](../index.md)"));
    }
}
