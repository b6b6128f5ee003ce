//! Raw announcement entry schema.

use serde::Deserialize;

/// Fields of the announcement entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AnnouncementFields {
    /// Announcement text.
    pub message: String,
    /// Display gate.
    pub visible: bool,
}
