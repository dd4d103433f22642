//! Route resolution between the tree view, lesson pages and the fallback page

use std::fmt;
use std::path::PathBuf;

/// A view the site can show
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - the learning tree
    Tree,
    /// `/lesson/:id` - a lesson detail page
    Lesson(String),
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a URL path
    ///
    /// A trailing slash is ignored; `/lesson/` without an id, or with an id
    /// that fails [`Route::is_valid_id`], does not match.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Self::Tree;
        }

        match trimmed.strip_prefix("/lesson/") {
            Some(id) if Self::is_valid_id(id) => Self::Lesson(id.to_string()),
            _ => Self::NotFound,
        }
    }

    /// Whether `id` can name a lesson page
    ///
    /// Ids become file names, so only ASCII letters, digits, `-` and `_` are
    /// allowed.
    #[must_use]
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Relative output file for this view with the given extension
    #[must_use]
    pub fn file_name(&self, extension: &str) -> PathBuf {
        match self {
            Self::Tree => PathBuf::from(format!("index.{extension}")),
            Self::Lesson(id) => PathBuf::from("lesson").join(format!("{id}.{extension}")),
            Self::NotFound => PathBuf::from(format!("404.{extension}")),
        }
    }

    /// Prefix that leads from this view's file back to the site root
    #[must_use]
    pub const fn root_prefix(&self) -> &'static str {
        match self {
            Self::Lesson(_) => "../",
            Self::Tree | Self::NotFound => "",
        }
    }

    /// Link to a lesson page from the site root
    #[must_use]
    pub fn lesson_href(id: &str, extension: &str) -> String {
        format!("lesson/{id}.{extension}")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => write!(f, "/"),
            Self::Lesson(id) => write!(f, "/lesson/{id}"),
            Self::NotFound => write!(f, "*"),
        }
    }
}
