//! Raw content store response schemas.
//!
//! Explicit per-endpoint shapes decoded with serde; only the fields the
//! normalizer actually reads are declared, and unknown fields are ignored.

mod announcement;
mod asset;
mod entry;
mod mission;
mod page;

pub(crate) use announcement::AnnouncementFields;
pub(crate) use asset::RawAsset;
pub(crate) use entry::{EntriesResponse, Entry, Includes};
pub(crate) use mission::MissionFields;
pub(crate) use page::{PageFields, PathFields};
