//! Content store client and normalizer for the SAR site.
//!
//! Talks to the headless content store over HTTP and normalizes its raw
//! entry/asset responses into the site's content model: [`Page`],
//! [`Announcement`], [`Mission`], and resolved page paths.
//!
//! Read operations degrade on failure: a transport error, a non-success
//! status, or a response that does not match the expected shape yields an
//! empty collection or "not found" (logged, never raised), so content
//! generation for unrelated pages is not blocked by one bad fetch. Only
//! configuration errors surface as `Err` — at client construction, where
//! they indicate a deployment mistake.
//!
//! The mission importer ([`MissionImporter`]) is the one write path: a
//! batch job against the management API, independent of the read side.

mod client;
mod error;
mod importer;
mod model;
mod normalize;
mod types;

pub use client::{ContentClient, Endpoint};
pub use error::ContentError;
pub use importer::{ImportError, MissionDraft, MissionImporter, parse_missions};
pub use model::{Announcement, Mission, Page, PagePath};
