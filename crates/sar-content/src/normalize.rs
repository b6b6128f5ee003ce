//! Normalization of raw store responses into the content model.
//!
//! Pure mapping functions: every transformation here is a function of its
//! inputs, so the network boundary stays thin and the shape contracts stay
//! unit-testable.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use sar_richtext::Image;
use tracing::warn;

use crate::model::{Mission, Page, PagePath};
use crate::types::{Entry, Includes, MissionFields, PageFields, PathFields, RawAsset};

/// Make an asset URL absolute.
///
/// The store may return protocol-relative URLs (`//host/path`).
pub(crate) fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

/// Normalize an asset for a page's `images` list.
///
/// Assets without image dimension metadata (e.g. PDFs) are excluded.
pub(crate) fn page_image(asset: &RawAsset) -> Option<Image> {
    let file = asset.fields.file.as_ref()?;
    let dims = file.details.image.as_ref()?;
    Some(Image {
        id: asset.sys.id.clone(),
        url: absolute_url(&file.url),
        width: dims.width,
        height: dims.height,
        title: asset.fields.title.clone().unwrap_or_default(),
    })
}

/// Normalize an asset for a gallery feed.
///
/// A gallery shows every attached asset: missing dimension metadata yields
/// width and height of 0 rather than dropping the asset. Only assets with no
/// file at all (nothing to link to) are skipped.
pub(crate) fn gallery_image(asset: &RawAsset) -> Option<Image> {
    let file = asset.fields.file.as_ref()?;
    let (width, height) = file
        .details
        .image
        .as_ref()
        .map_or((0, 0), |dims| (dims.width, dims.height));
    Some(Image {
        id: asset.sys.id.clone(),
        url: absolute_url(&file.url),
        width,
        height,
        title: asset.fields.title.clone().unwrap_or_default(),
    })
}

/// Build a [`Page`] from a fetched entry and its side-loaded assets.
pub(crate) fn page_from_bundle(entry: Entry<PageFields>, includes: Option<Includes>) -> Page {
    let images = includes
        .map(|includes| includes.assets.iter().filter_map(page_image).collect())
        .unwrap_or_default();
    Page {
        id: entry.sys.id,
        title: entry.fields.title,
        slug: entry.fields.slug,
        body: entry.fields.body,
        images,
    }
}

/// Resolve every page's path from a single fetched batch.
///
/// Walks parent references in memory, prepending each ancestor's slug. The
/// walk keeps a visited-id set and treats a repeated id as termination, so a
/// self-referential or circular parent chain cannot hang resolution. An
/// ancestor missing from the batch also terminates the walk.
pub(crate) fn resolve_paths(items: &[Entry<PathFields>]) -> Vec<PagePath> {
    let by_id: HashMap<&str, &Entry<PathFields>> = items
        .iter()
        .map(|entry| (entry.sys.id.as_str(), entry))
        .collect();

    items
        .iter()
        .map(|entry| {
            let mut segments = vec![entry.fields.slug.clone()];
            let mut visited: HashSet<&str> = HashSet::from([entry.sys.id.as_str()]);
            let mut parent = entry.fields.parent_page.as_ref();

            while let Some(link) = parent {
                let id = link.sys.id.as_str();
                if !visited.insert(id) {
                    warn!("cyclic parent chain at page {id}, stopping path resolution");
                    break;
                }
                let Some(ancestor) = by_id.get(id) else {
                    warn!("parent page {id} not in batch, stopping path resolution");
                    break;
                };
                segments.push(ancestor.fields.slug.clone());
                parent = ancestor.fields.parent_page.as_ref();
            }

            segments.reverse();
            PagePath { segments }
        })
        .collect()
}

/// Normalize a mission entry.
///
/// The stored date is an ISO date or date-time string; only the leading
/// `YYYY-MM-DD` is significant. Entries with unparsable dates are dropped
/// with a warning.
pub(crate) fn mission_from_entry(entry: Entry<MissionFields>) -> Option<Mission> {
    let Some(date) = parse_mission_date(&entry.fields.date) else {
        warn!(
            "mission {} has unparsable date '{}', skipping",
            entry.fields.number, entry.fields.date
        );
        return None;
    };
    Some(Mission {
        id: entry.sys.id,
        mission_number: entry.fields.number,
        title: entry.fields.title,
        date,
        summary: entry.fields.summary,
    })
}

/// Parse the leading `YYYY-MM-DD` of an ISO date or date-time string.
fn parse_mission_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// Sort missions ascending by lexical `mission_number` comparison.
///
/// Lexical, not numeric: `"24-10"` orders before `"24-2"`.
pub(crate) fn sort_missions(missions: &mut [Mission]) {
    missions.sort_by(|a, b| a.mission_number.cmp(&b.mission_number));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path_entry(id: &str, slug: &str, parent: Option<&str>) -> Entry<PathFields> {
        let parent_page = parent.map(|pid| json!({"sys": {"id": pid}}));
        serde_json::from_value(json!({
            "sys": {"id": id},
            "fields": {"slug": slug, "parentPage": parent_page}
        }))
        .unwrap()
    }

    fn asset(id: &str, title: Option<&str>, url: &str, dims: Option<(u32, u32)>) -> RawAsset {
        let image = dims.map(|(width, height)| json!({"width": width, "height": height}));
        serde_json::from_value(json!({
            "sys": {"id": id},
            "fields": {
                "title": title,
                "file": {"url": url, "details": {"image": image}}
            }
        }))
        .unwrap()
    }

    fn mission_entry(id: &str, number: &str, date: &str) -> Entry<MissionFields> {
        serde_json::from_value(json!({
            "sys": {"id": id},
            "fields": {
                "number": number,
                "title": format!("Mission {number}"),
                "date": date,
                "summary": "Subject located."
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_absolute_url_prefixes_protocol_relative() {
        assert_eq!(
            absolute_url("//images.example.com/a.jpg"),
            "https://images.example.com/a.jpg"
        );
    }

    #[test]
    fn test_absolute_url_keeps_absolute() {
        assert_eq!(
            absolute_url("https://images.example.com/a.jpg"),
            "https://images.example.com/a.jpg"
        );
    }

    #[test]
    fn test_page_image_excludes_non_image_asset() {
        let pdf = asset("a1", Some("Waiver"), "//assets.example.com/w.pdf", None);
        assert!(page_image(&pdf).is_none());
    }

    #[test]
    fn test_page_image_normalizes_image_asset() {
        let photo = asset("a2", None, "//images.example.com/p.jpg", Some((640, 480)));
        let image = page_image(&photo).unwrap();
        assert_eq!(image.id, "a2");
        assert_eq!(image.url, "https://images.example.com/p.jpg");
        assert_eq!((image.width, image.height), (640, 480));
        assert_eq!(image.title, "");
    }

    #[test]
    fn test_gallery_image_keeps_non_image_asset_with_zero_dims() {
        let pdf = asset("a1", Some("Waiver"), "//assets.example.com/w.pdf", None);
        let image = gallery_image(&pdf).unwrap();
        assert_eq!((image.width, image.height), (0, 0));
        assert_eq!(image.title, "Waiver");
    }

    #[test]
    fn test_gallery_image_skips_asset_without_file() {
        let fileless: RawAsset = serde_json::from_value(json!({
            "sys": {"id": "a3"},
            "fields": {"title": "Draft"}
        }))
        .unwrap();
        assert!(gallery_image(&fileless).is_none());
    }

    #[test]
    fn test_page_from_bundle_filters_images() {
        let entry: Entry<PageFields> = serde_json::from_value(json!({
            "sys": {"id": "p1"},
            "fields": {"title": "About", "slug": "about", "body": {
                "nodeType": "document", "content": []
            }}
        }))
        .unwrap();
        let includes: Includes = serde_json::from_value(json!({
            "Asset": [
                {"sys": {"id": "a1"}, "fields": {"file": {
                    "url": "//i.example.com/a.jpg",
                    "details": {"image": {"width": 10, "height": 20}}
                }}},
                {"sys": {"id": "a2"}, "fields": {"file": {
                    "url": "//i.example.com/b.pdf",
                    "details": {}
                }}}
            ]
        }))
        .unwrap();

        let page = page_from_bundle(entry, Some(includes));
        assert_eq!(page.id, "p1");
        assert_eq!(page.slug, "about");
        assert_eq!(page.images.len(), 1);
        assert_eq!(page.images[0].id, "a1");
    }

    #[test]
    fn test_resolve_paths_one_per_page_prefix_consistent() {
        let items = vec![
            path_entry("root", "home", None),
            path_entry("mid", "about", Some("root")),
            path_entry("leaf", "join", Some("mid")),
        ];

        let paths = resolve_paths(&items);

        assert_eq!(paths.len(), items.len());
        assert_eq!(paths[0].segments, vec!["home"]);
        assert_eq!(paths[1].segments, vec!["home", "about"]);
        assert_eq!(paths[2].segments, vec!["home", "about", "join"]);
        // Each path ends in the page's own slug, and the parent's path is a
        // strict prefix of the child's.
        assert_eq!(paths[2].leaf(), Some("join"));
        assert_eq!(paths[2].segments[..2], paths[1].segments[..]);
        assert_eq!(paths[1].segments[..1], paths[0].segments[..]);
    }

    #[test]
    fn test_resolve_paths_self_referential_terminates() {
        let items = vec![path_entry("loop", "stuck", Some("loop"))];

        let paths = resolve_paths(&items);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].leaf(), Some("stuck"));
    }

    #[test]
    fn test_resolve_paths_two_node_cycle_terminates() {
        let items = vec![
            path_entry("a", "alpha", Some("b")),
            path_entry("b", "beta", Some("a")),
        ];

        let paths = resolve_paths(&items);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].leaf(), Some("alpha"));
        assert_eq!(paths[1].leaf(), Some("beta"));
    }

    #[test]
    fn test_resolve_paths_missing_parent_terminates() {
        let items = vec![path_entry("child", "orphan", Some("gone"))];

        let paths = resolve_paths(&items);

        assert_eq!(paths[0].segments, vec!["orphan"]);
    }

    #[test]
    fn test_mission_from_entry_parses_date_time() {
        let mission = mission_from_entry(mission_entry("m1", "24-03", "2024-02-10T09:30:00Z"))
            .unwrap();
        assert_eq!(mission.mission_number, "24-03");
        assert_eq!(mission.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_mission_from_entry_parses_plain_date() {
        let mission = mission_from_entry(mission_entry("m1", "24-03", "2024-02-10")).unwrap();
        assert_eq!(mission.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_mission_from_entry_drops_unparsable_date() {
        assert!(mission_from_entry(mission_entry("m1", "24-03", "February 10")).is_none());
    }

    #[test]
    fn test_sort_missions_is_lexical_not_numeric() {
        let mut missions: Vec<Mission> = ["24-03", "24-10", "24-2"]
            .iter()
            .map(|number| mission_from_entry(mission_entry(number, number, "2024-06-01")).unwrap())
            .collect();

        sort_missions(&mut missions);

        let order: Vec<&str> = missions
            .iter()
            .map(|mission| mission.mission_number.as_str())
            .collect();
        // "24-10" sorts before "24-2" lexically.
        assert_eq!(order, vec!["24-03", "24-10", "24-2"]);
    }
}
