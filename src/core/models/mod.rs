//! Data models for the learning tree

pub mod content;
pub mod learner;
pub mod lesson;

pub use content::{Difficulty, LessonContent, Section};
pub use learner::LearnerProfile;
pub use lesson::{Lesson, LessonStatus};
