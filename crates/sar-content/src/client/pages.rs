//! Page operations.

use std::collections::BTreeMap;

use tracing::info;

use super::ContentClient;
use crate::model::{Page, PagePath};
use crate::normalize;
use crate::types::{EntriesResponse, PageFields, PathFields};

impl ContentClient {
    /// List the resolved path of every page.
    ///
    /// Fetches all page entries in one request, projected to id, slug, and
    /// parent reference, then resolves ancestor chains in memory — no
    /// per-page network calls. On fetch failure the list is empty.
    pub fn list_page_paths(&self, preview: bool) -> Vec<PagePath> {
        info!("Listing page paths");

        let mut params = BTreeMap::new();
        params.insert("content_type", "page".to_owned());
        params.insert("select", "sys.id,fields.slug,fields.parentPage".to_owned());

        let response: EntriesResponse<PathFields> =
            self.fetch_entries(&params, preview, "page paths");
        normalize::resolve_paths(&response.items)
    }

    /// Get a page by slug.
    ///
    /// Returns `None` when no page matches — a non-error absence — and also
    /// when the fetch fails (logged). Included assets carrying image
    /// dimension metadata become the page's `images`.
    pub fn page_by_slug(&self, slug: &str, preview: bool) -> Option<Page> {
        info!("Getting page '{slug}'");

        let mut params = BTreeMap::new();
        params.insert("content_type", "page".to_owned());
        params.insert("fields.slug", slug.to_owned());
        params.insert("limit", "1".to_owned());

        let response: EntriesResponse<PageFields> = self.fetch_entries(&params, preview, "page");
        let EntriesResponse { items, includes } = response;
        let entry = items.into_iter().next()?;
        Some(normalize::page_from_bundle(entry, includes))
    }
}
