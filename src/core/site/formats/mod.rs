//! Page format implementations
//!
//! Renderers for HTML pages, standalone SVG drawings, and Markdown.

pub mod html;
pub mod markdown;
pub mod svg;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use svg::SvgRenderer;

use super::PageRenderer;
use std::fmt;
use std::str::FromStr;

/// Supported page formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// HTML pages with inline SVG trail
    Html,
    /// Standalone SVG drawings
    Svg,
    /// Markdown pages
    Markdown,
}

impl PageFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Markdown => "md",
        }
    }

    /// Renderer producing this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new()),
            Self::Svg => Box::new(SvgRenderer::new()),
            Self::Markdown => Box::new(MarkdownRenderer::new()),
        }
    }
}

impl FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown page format: {s}")),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Svg => write!(f, "svg"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}
