//! Normalized content model.
//!
//! Read-only projections of remote store state, constructed fresh per
//! request and never mutated.

use chrono::NaiveDate;
use sar_richtext::{Document, Image};

/// A site page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Stable entry id from the content store.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL segment (unique among siblings, not globally).
    pub slug: String,
    /// Structured rich-text body.
    pub body: Document,
    /// Included assets that are image files, resolved alongside the page.
    pub images: Vec<Image>,
}

/// Ordered slug sequence from root ancestor to a page itself.
///
/// Derived from parent-page references; not stored in the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath {
    /// Slugs in root-to-leaf order.
    pub segments: Vec<String>,
}

impl PagePath {
    /// The page's own slug (final path element).
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl std::fmt::Display for PagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// A site-wide announcement banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Stable entry id from the content store.
    pub id: String,
    /// Announcement text.
    pub message: String,
    /// Whether the banner should be displayed.
    pub visible: bool,
}

/// A search-and-rescue mission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    /// Stable entry id from the content store.
    pub id: String,
    /// Mission number, e.g. `"24-03"`. Ordered lexically, not numerically.
    pub mission_number: String,
    /// Mission title.
    pub title: String,
    /// Mission date.
    pub date: NaiveDate,
    /// One-paragraph summary.
    pub summary: String,
}
