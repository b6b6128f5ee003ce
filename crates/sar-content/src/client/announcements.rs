//! Announcement operations.

use std::collections::BTreeMap;

use tracing::info;

use super::ContentClient;
use crate::model::Announcement;
use crate::types::{AnnouncementFields, EntriesResponse};

impl ContentClient {
    /// Get the announcement entry by its fixed, out-of-band id.
    ///
    /// Returns `None` when the entry is absent or the fetch fails; the
    /// caller simply suppresses the banner.
    pub fn announcement(&self, id: &str, preview: bool) -> Option<Announcement> {
        info!("Getting announcement {id}");

        let mut params = BTreeMap::new();
        params.insert("sys.id", id.to_owned());

        let response: EntriesResponse<AnnouncementFields> =
            self.fetch_entries(&params, preview, "announcement");
        let entry = response.items.into_iter().next()?;
        Some(Announcement {
            id: entry.sys.id,
            message: entry.fields.message,
            visible: entry.fields.visible,
        })
    }
}
