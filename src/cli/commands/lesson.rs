//! Lesson command handler
//!
//! Prints a lesson's detail page as plain text, or the not-found message when
//! the id has no page.

use super::resolve_catalog;
use learning_tree::config::Config;
use learning_tree::core::catalog::Catalog;
use learning_tree::core::models::LessonContent;
use learning_tree::core::routes::Route;
use logger::{debug, warn};
use std::path::Path;

/// Run the lesson command.
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded or the lesson
/// has no page.
pub fn run(config: &Config, id: &str, catalog_path: Option<&Path>) -> Result<(), String> {
    let catalog = resolve_catalog(config, catalog_path)?;
    let route = Route::resolve(&format!("/lesson/{id}"));
    debug!("Resolved lesson '{id}' to route {route}");

    let content = match &route {
        Route::Lesson(id) => catalog.find_content(id),
        Route::Tree | Route::NotFound => None,
    };

    let Some(content) = content else {
        warn!("No lesson page for '{id}'");
        println!("Lesson not found");
        println!("Return to Learning Tree: learningtree render");
        return Err(format!("✗ Lesson not found: '{id}'"));
    };

    print_lesson(&catalog, content);
    Ok(())
}

fn print_lesson(catalog: &Catalog, content: &LessonContent) {
    println!("\n=== {} ===\n", content.title);
    println!(
        "{} XP | {} | {}",
        content.xp_points, content.estimated_time, content.difficulty
    );
    if let Some(lesson) = catalog.find_lesson(&content.id) {
        println!("Status: {}", lesson.status());
    }
    println!("Progress: {}%", content.progress_percent());
    println!("\n{}", content.content);

    for (idx, section) in content.sections.iter().enumerate() {
        println!("\n#{} {}", idx + 1, section.title);
        println!("   {}", section.content);
    }

    if !content.prerequisites.is_empty() {
        let names: Vec<&str> = content
            .prerequisites
            .iter()
            .map(|id| catalog.find_lesson(id).map_or(id.as_str(), |l| l.title.as_str()))
            .collect();
        println!("\nBefore this lesson: {}", names.join(", "));
    }
}
