//! Lesson model (a node on the tree)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lesson node shown on the learning tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson identifier used in routes (e.g., "1")
    pub id: String,

    /// Display title (e.g., "Getting Started")
    pub title: String,

    /// Font Awesome icon name (e.g., "fa-robot")
    pub icon: String,

    /// Gradient classes for the node (e.g., "from-emerald-400 to-teal-400")
    pub color: String,

    /// Whether the learner can open this lesson
    #[serde(default)]
    pub unlocked: bool,

    /// XP awarded on completion
    pub xp: u32,

    /// Completion in percent (0-100), when known
    #[serde(default)]
    pub completion_percentage: Option<u8>,

    /// Short summary for the info card
    #[serde(default)]
    pub description: Option<String>,

    /// XP needed before the lesson unlocks
    #[serde(default)]
    pub required_xp: Option<u32>,
}

/// Where a learner stands on a lesson, as shown in its info card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    /// Not yet unlocked
    Locked {
        /// XP threshold for unlocking
        required_xp: u32,
    },
    /// Fully completed
    Completed,
    /// Unlocked, with completion in percent
    InProgress(u8),
}

impl LessonStatus {
    /// Font Awesome icon shown next to the status line
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Locked { .. } => "fa-lock",
            Self::Completed => "fa-check-circle",
            Self::InProgress(_) => "fa-book-reader",
        }
    }

    /// Short machine-friendly name, used for CSS classes
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Locked { .. } => "locked",
            Self::Completed => "completed",
            Self::InProgress(_) => "in-progress",
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked { required_xp } => write!(f, "Required XP: {required_xp}"),
            Self::Completed => write!(f, "Completed"),
            Self::InProgress(pct) => write!(f, "In Progress - {pct}%"),
        }
    }
}

impl Lesson {
    /// Create a new locked lesson with no progress
    ///
    /// # Arguments
    /// * `id` - Route identifier
    /// * `title` - Display title
    /// * `icon` - Icon name
    /// * `color` - Gradient classes
    /// * `xp` - XP awarded on completion
    #[must_use]
    pub const fn new(id: String, title: String, icon: String, color: String, xp: u32) -> Self {
        Self {
            id,
            title,
            icon,
            color,
            unlocked: false,
            xp,
            completion_percentage: None,
            description: None,
            required_xp: None,
        }
    }

    /// Mark the lesson as unlocked
    #[must_use]
    pub const fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    /// Set completion percent (clamped to 100)
    #[must_use]
    pub fn with_completion(mut self, percent: u8) -> Self {
        self.completion_percentage = Some(percent.min(100));
        self
    }

    /// Set the info card description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the XP threshold for unlocking
    #[must_use]
    pub const fn with_required_xp(mut self, required_xp: u32) -> Self {
        self.required_xp = Some(required_xp);
        self
    }

    /// Derive the status shown on the info card
    #[must_use]
    pub fn status(&self) -> LessonStatus {
        if !self.unlocked {
            return LessonStatus::Locked {
                required_xp: self.required_xp.unwrap_or(0),
            };
        }
        match self.completion_percentage {
            Some(100) => LessonStatus::Completed,
            other => LessonStatus::InProgress(other.unwrap_or(0)),
        }
    }

    /// Whether the lesson is complete
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status() == LessonStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson::new(
            "2".to_string(),
            "Basic Concepts".to_string(),
            "fa-book-open".to_string(),
            "from-teal-400 to-cyan-400".to_string(),
            75,
        )
    }

    #[test]
    fn test_new_lesson_is_locked() {
        let lesson = lesson();
        assert!(!lesson.unlocked);
        assert_eq!(lesson.status(), LessonStatus::Locked { required_xp: 0 });
    }

    #[test]
    fn test_locked_status_reports_threshold() {
        let lesson = lesson().with_required_xp(125).with_completion(40);
        assert_eq!(lesson.status(), LessonStatus::Locked { required_xp: 125 });
        assert_eq!(lesson.status().to_string(), "Required XP: 125");
    }

    #[test]
    fn test_completed_status() {
        let lesson = lesson().unlocked().with_completion(100);
        assert!(lesson.is_completed());
        assert_eq!(lesson.status().to_string(), "Completed");
        assert_eq!(lesson.status().icon(), "fa-check-circle");
    }

    #[test]
    fn test_in_progress_status() {
        let lesson = lesson().unlocked().with_completion(60);
        assert_eq!(lesson.status(), LessonStatus::InProgress(60));
        assert_eq!(lesson.status().to_string(), "In Progress - 60%");
        assert_eq!(lesson.status().slug(), "in-progress");
    }

    #[test]
    fn test_unknown_completion_counts_as_zero() {
        let lesson = lesson().unlocked();
        assert_eq!(lesson.status(), LessonStatus::InProgress(0));
    }

    #[test]
    fn test_completion_is_clamped() {
        let lesson = lesson().with_completion(250);
        assert_eq!(lesson.completion_percentage, Some(100));
    }
}
