//! Lesson catalog: the tree's lessons, their detail pages and the learner header

pub mod builtin;
pub mod loader;

pub use loader::{load_catalog, parse_catalog};

use crate::core::models::{LearnerProfile, Lesson, LessonContent};
use crate::core::routes::Route;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All static data behind the tree view and lesson pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Header badges
    #[serde(default)]
    pub learner: LearnerProfile,

    /// Lessons in path order (top to bottom)
    #[serde(default)]
    pub lessons: Vec<Lesson>,

    /// Detail pages, looked up by lesson id
    #[serde(default)]
    pub contents: Vec<LessonContent>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new(learner: LearnerProfile) -> Self {
        Self {
            learner,
            lessons: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// The catalog shipped with the tool
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Append a lesson to the end of the path
    pub fn add_lesson(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    /// Register a detail page, replacing any page with the same id
    pub fn add_content(&mut self, content: LessonContent) {
        self.contents.retain(|c| c.id != content.id);
        self.contents.push(content);
    }

    /// Look up a lesson node by id
    #[must_use]
    pub fn find_lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Look up a detail page by id
    #[must_use]
    pub fn find_content(&self, id: &str) -> Option<&LessonContent> {
        self.contents.iter().find(|c| c.id == id)
    }

    /// Number of lessons on the path
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Sum of XP over all lessons
    #[must_use]
    pub fn available_xp(&self) -> u32 {
        self.lessons.iter().map(|l| l.xp).sum()
    }

    /// Sum of XP over completed lessons
    #[must_use]
    pub fn earned_xp(&self) -> u32 {
        self.lessons
            .iter()
            .filter(|l| l.is_completed())
            .map(|l| l.xp)
            .sum()
    }

    /// Check ids and percentages
    ///
    /// # Errors
    /// Returns an error describing the first problem found: an empty, unsafe
    /// or duplicate lesson id, an unsafe or duplicate content id, or a
    /// percentage above 100.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for lesson in &self.lessons {
            if lesson.id.trim().is_empty() {
                return Err(format!("Lesson '{}' has an empty id", lesson.title));
            }
            if !Route::is_valid_id(&lesson.id) {
                return Err(format!(
                    "Invalid lesson id: '{}' (use letters, digits, '-' or '_')",
                    lesson.id
                ));
            }
            if !seen.insert(lesson.id.as_str()) {
                return Err(format!("Duplicate lesson id: '{}'", lesson.id));
            }
            if let Some(pct) = lesson.completion_percentage.filter(|p| *p > 100) {
                return Err(format!(
                    "Lesson '{}' has completion {pct}% (max 100)",
                    lesson.id
                ));
            }
        }

        let mut seen = HashSet::new();
        for content in &self.contents {
            if !Route::is_valid_id(&content.id) {
                return Err(format!(
                    "Invalid lesson content id: '{}' (use letters, digits, '-' or '_')",
                    content.id
                ));
            }
            if !seen.insert(content.id.as_str()) {
                return Err(format!("Duplicate lesson content id: '{}'", content.id));
            }
            if let Some(pct) = content.progress.filter(|p| *p > 100) {
                return Err(format!(
                    "Lesson content '{}' has progress {pct}% (max 100)",
                    content.id
                ));
            }
        }

        Ok(())
    }
}
