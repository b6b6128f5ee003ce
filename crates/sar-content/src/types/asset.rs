//! Raw asset schema.

use serde::Deserialize;

use super::entry::Sys;

/// A stored binary with metadata (typically an image).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAsset {
    /// Asset system metadata.
    pub sys: Sys,
    /// Asset fields.
    #[serde(default)]
    pub fields: AssetFields,
}

/// Asset field payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AssetFields {
    /// Asset title.
    #[serde(default)]
    pub title: Option<String>,
    /// The stored file; absent on drafts with no upload.
    #[serde(default)]
    pub file: Option<AssetFile>,
}

/// File metadata of an asset.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AssetFile {
    /// File URL; the store may return it protocol-relative (`//...`).
    pub url: String,
    /// File details.
    #[serde(default)]
    pub details: FileDetails,
}

/// Detail metadata of a stored file.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileDetails {
    /// Image dimensions; absent for non-image files (e.g. PDFs).
    #[serde(default)]
    pub image: Option<ImageDimensions>,
}

/// Natural dimensions of an image file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
