//! Photo gallery operations.

use std::collections::BTreeMap;

use sar_richtext::Image;
use tracing::info;

use super::ContentClient;
use crate::normalize;
use crate::types::EntriesResponse;

impl ContentClient {
    /// Get the flat image list attached to an entry.
    ///
    /// The entry is fetched by id purely to harvest its side-loaded assets;
    /// it is a container of attachments, not a page. Every attached asset is
    /// kept — those without image dimension metadata get width and height of
    /// 0. On fetch failure the list is empty.
    pub fn photos(&self, entry_id: &str, preview: bool) -> Vec<Image> {
        info!("Getting photos entry {entry_id}");

        let mut params = BTreeMap::new();
        params.insert("sys.id", entry_id.to_owned());

        let response: EntriesResponse<serde_json::Value> =
            self.fetch_entries(&params, preview, "photos");
        response
            .includes
            .map(|includes| {
                includes
                    .assets
                    .iter()
                    .filter_map(normalize::gallery_image)
                    .collect()
            })
            .unwrap_or_default()
    }
}
