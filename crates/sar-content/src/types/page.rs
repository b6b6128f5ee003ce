//! Raw page entry schemas.

use sar_richtext::Document;
use serde::Deserialize;

use super::entry::EntryLink;

/// Fields of a full page entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageFields {
    /// Display title.
    pub title: String,
    /// URL segment.
    pub slug: String,
    /// Structured rich-text body.
    #[serde(default)]
    pub body: Document,
    /// Optional reference to the parent page.
    #[serde(rename = "parentPage", default)]
    pub parent_page: Option<EntryLink>,
}

/// Projected page fields for path listing (`select=sys.id,fields.slug,fields.parentPage`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PathFields {
    /// URL segment.
    pub slug: String,
    /// Optional reference to the parent page.
    #[serde(rename = "parentPage", default)]
    pub parent_page: Option<EntryLink>,
}
