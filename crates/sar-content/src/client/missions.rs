//! Mission operations.

use std::collections::BTreeMap;

use tracing::info;

use super::ContentClient;
use crate::model::Mission;
use crate::normalize;
use crate::types::{EntriesResponse, MissionFields};

impl ContentClient {
    /// Get all missions for a calendar year.
    ///
    /// Fetches mission entries whose date falls in the half-open window
    /// `[Jan 1 of year, Jan 1 of year+1)`, sorted ascending by lexical
    /// `mission_number` comparison. On fetch failure the list is empty.
    pub fn missions_for_year(&self, year: i32, preview: bool) -> Vec<Mission> {
        info!("Getting missions for {year}");

        let mut params = BTreeMap::new();
        params.insert("content_type", "mission".to_owned());
        params.insert("fields.date[gte]", format!("{year}-01-01"));
        params.insert("fields.date[lt]", format!("{}-01-01", year + 1));

        let response: EntriesResponse<MissionFields> =
            self.fetch_entries(&params, preview, "missions");
        let mut missions: Vec<Mission> = response
            .items
            .into_iter()
            .filter_map(normalize::mission_from_entry)
            .collect();
        normalize::sort_missions(&mut missions);
        missions
    }
}
