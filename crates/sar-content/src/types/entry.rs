//! Generic entry envelope types.

use serde::Deserialize;

use super::asset::RawAsset;

/// Response envelope for entry queries.
///
/// A missing `items` array is a decode error; callers degrade it to the
/// default (empty) response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntriesResponse<F> {
    /// Matched entries.
    pub items: Vec<Entry<F>>,
    /// Side-loaded linked records.
    #[serde(default)]
    pub includes: Option<Includes>,
}

impl<F> Default for EntriesResponse<F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            includes: None,
        }
    }
}

/// A typed entry record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Entry<F> {
    /// Entry system metadata.
    pub sys: Sys,
    /// Content-type-specific fields.
    pub fields: F,
}

/// Entry system metadata.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Sys {
    /// Opaque stable identifier.
    pub id: String,
}

/// Reference from one entry to another.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntryLink {
    /// Referenced entry metadata.
    pub sys: Sys,
}

/// Side-loaded records attached to a response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Includes {
    /// Assets referenced by the matched entries.
    #[serde(rename = "Asset", default)]
    pub assets: Vec<RawAsset>,
}
