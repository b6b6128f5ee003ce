//! Raw mission entry schema.

use serde::Deserialize;

/// Fields of a mission entry.
///
/// The store field is `number`; the normalized model calls it
/// `mission_number`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MissionFields {
    /// Mission number (lexically sortable string).
    pub number: String,
    /// Mission title.
    pub title: String,
    /// ISO date or date-time string.
    pub date: String,
    /// One-paragraph summary.
    pub summary: String,
}
