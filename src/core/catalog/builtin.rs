//! Lessons shipped with the tool

use super::Catalog;
use crate::core::models::{Difficulty, LearnerProfile, Lesson, LessonContent};

fn lesson(id: &str, title: &str, icon: &str, color: &str, xp: u32) -> Lesson {
    Lesson::new(
        id.to_string(),
        title.to_string(),
        icon.to_string(),
        color.to_string(),
        xp,
    )
}

fn content(
    id: &str,
    title: &str,
    text: &str,
    xp_points: u32,
    estimated_time: &str,
    difficulty: Difficulty,
) -> LessonContent {
    LessonContent::new(
        id.to_string(),
        title.to_string(),
        text.to_string(),
        xp_points,
        estimated_time.to_string(),
        difficulty,
    )
}

/// Build the default catalog
pub(super) fn catalog() -> Catalog {
    let mut catalog = Catalog::new(LearnerProfile {
        total_xp: 275,
        membership: "VIP Member".to_string(),
    });

    catalog.add_lesson(
        lesson("1", "Getting Started", "fa-robot", "from-emerald-400 to-teal-400", 50)
            .unlocked()
            .with_completion(100)
            .with_description("Begin your journey with fundamental concepts and platform basics")
            .with_required_xp(0),
    );
    catalog.add_lesson(
        lesson("2", "Basic Concepts", "fa-book-open", "from-teal-400 to-cyan-400", 75)
            .unlocked()
            .with_completion(60)
            .with_description(
                "Master fundamental programming concepts through interactive exercises",
            )
            .with_required_xp(50),
    );
    catalog.add_lesson(
        lesson("3", "First Project", "fa-code", "from-cyan-400 to-sky-400", 100)
            .with_completion(0)
            .with_description("Apply your knowledge by building a real-world project from scratch")
            .with_required_xp(125),
    );
    catalog.add_lesson(
        lesson("4", "Advanced Topics", "fa-rocket", "from-sky-400 to-blue-400", 150)
            .with_completion(0)
            .with_description("Dive deep into advanced concepts and become a skilled developer")
            .with_required_xp(225),
    );

    catalog.add_content(
        content(
            "1",
            "Getting Started",
            "Welcome to your learning journey! This is the first step to mastering new skills.",
            50,
            "10 mins",
            Difficulty::Beginner,
        )
        .with_section(
            "Introduction",
            "In this lesson, you will learn the fundamental concepts and get familiar with the learning platform.",
        )
        .with_section(
            "Platform Overview",
            "Navigate through our interactive learning tree, track your progress, and earn XP points as you complete lessons.",
        )
        .with_section(
            "Next Steps",
            "After completing this lesson, you'll be ready to tackle more advanced topics and start your learning journey.",
        )
        .with_progress(0),
    );
    catalog.add_content(content(
        "2",
        "Basic Concepts",
        "Let's dive into the fundamental concepts...",
        75,
        "15 mins",
        Difficulty::Beginner,
    ));
    catalog.add_content(content(
        "3",
        "First Project",
        "Time to put your knowledge into practice...",
        100,
        "20 mins",
        Difficulty::Intermediate,
    ));
    catalog.add_content(content(
        "4",
        "Advanced Topics",
        "Ready for some advanced concepts?...",
        150,
        "30 mins",
        Difficulty::Advanced,
    ));

    catalog
}
