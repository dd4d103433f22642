//! Lesson detail content

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lesson difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Entry-level lesson
    Beginner,
    /// Builds on earlier lessons
    Intermediate,
    /// Deep-dive lesson
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

/// One numbered section of a lesson page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Section body text
    pub content: String,
}

/// Everything shown on a lesson's detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    /// Lesson identifier, matching [`Lesson::id`](super::Lesson)
    pub id: String,
    /// Page title
    pub title: String,
    /// Lead paragraph
    pub content: String,
    /// XP badge value
    pub xp_points: u32,
    /// Time badge (e.g., "10 mins")
    pub estimated_time: String,
    /// Difficulty badge
    pub difficulty: Difficulty,
    /// Numbered sections
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Progress bar fill in percent
    #[serde(default)]
    pub progress: Option<u8>,
    /// Lesson ids that should be finished first
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl LessonContent {
    /// Create lesson content without sections
    #[must_use]
    pub const fn new(
        id: String,
        title: String,
        content: String,
        xp_points: u32,
        estimated_time: String,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            title,
            content,
            xp_points,
            estimated_time,
            difficulty,
            sections: Vec::new(),
            progress: None,
            prerequisites: Vec::new(),
        }
    }

    /// Append a section
    #[must_use]
    pub fn with_section(mut self, title: &str, content: &str) -> Self {
        self.sections.push(Section {
            title: title.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Set the progress bar value
    #[must_use]
    pub const fn with_progress(mut self, percent: u8) -> Self {
        self.progress = Some(percent);
        self
    }

    /// Progress bar width in percent; missing or out-of-range values show as empty or full
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress.map_or(0, |p| p.min(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("ADVANCED".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_sections_keep_order() {
        let content = LessonContent::new(
            "1".to_string(),
            "Getting Started".to_string(),
            "Welcome".to_string(),
            50,
            "10 mins".to_string(),
            Difficulty::Beginner,
        )
        .with_section("Introduction", "First")
        .with_section("Next Steps", "Second");

        assert_eq!(content.sections.len(), 2);
        assert_eq!(content.sections[0].title, "Introduction");
        assert_eq!(content.sections[1].title, "Next Steps");
    }

    #[test]
    fn test_progress_percent_defaults_to_zero() {
        let content = LessonContent::new(
            "3".to_string(),
            "First Project".to_string(),
            "Practice".to_string(),
            100,
            "20 mins".to_string(),
            Difficulty::Intermediate,
        );
        assert_eq!(content.progress_percent(), 0);
        assert_eq!(content.with_progress(140).progress_percent(), 100);
    }
}
