//! Mission importer.
//!
//! One-off batch job that parses a delimited text file of mission records
//! and pushes them to the content store's management API: create the entry,
//! then publish it. This is a write path, independent of the read side, and
//! it does NOT degrade — any failure aborts the import so a partial batch
//! is visible immediately.

use std::time::Duration;

use chrono::NaiveDate;
use sar_config::StoreConfig;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use ureq::Agent;

/// Locale key the management API expects on field values.
const LOCALE: &str = "en-US";

/// Management API timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Error from the mission importer.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Invalid or missing store configuration.
    #[error("configuration error: {0}")]
    Config(#[from] sar_config::ConfigError),

    /// A chunk of the input file did not match the expected format.
    #[error("failed to parse mission chunk: {reason}\n\n{chunk}")]
    Parse {
        /// The offending chunk, verbatim.
        chunk: String,
        /// What was wrong with it.
        reason: String,
    },

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// Entry creation was rejected.
    #[error("failed to create mission {number}: HTTP {status} - {body}")]
    Create {
        /// Mission number from the draft.
        number: String,
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Entry publish was rejected.
    #[error("failed to publish mission {number}: HTTP {status} - {body}")]
    Publish {
        /// Mission number from the draft.
        number: String,
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
}

/// A mission parsed from the import file, not yet pushed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDraft {
    /// Mission number, e.g. `"24-03"`.
    pub number: String,
    /// Mission title.
    pub title: String,
    /// Mission date.
    pub date: NaiveDate,
    /// One-paragraph summary.
    pub summary: String,
}

/// Parse an import file into mission drafts.
///
/// The file is blank-line separated chunks of four lines: number, title,
/// date, summary. The date line is truncated at its first comma (trailing
/// time-of-day annotations) and must then read `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ImportError::Parse`] naming the offending chunk.
pub fn parse_missions(text: &str) -> Result<Vec<MissionDraft>, ImportError> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_chunk)
        .collect()
}

/// Parse one blank-line delimited chunk.
fn parse_chunk(chunk: &str) -> Result<MissionDraft, ImportError> {
    let parse_error = |reason: String| ImportError::Parse {
        chunk: chunk.to_owned(),
        reason,
    };

    let lines: Vec<&str> = chunk.lines().collect();
    let [number, title, date_line, summary] = lines[..] else {
        return Err(parse_error(format!(
            "expected four lines (number, title, date, summary), got {}",
            lines.len()
        )));
    };

    let date_text = date_line
        .split_once(',')
        .map_or(date_line, |(before, _)| before)
        .trim();
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
        .map_err(|err| parse_error(format!("invalid date '{date_text}': {err}")))?;

    Ok(MissionDraft {
        number: number.trim().to_owned(),
        title: title.trim().to_owned(),
        date,
        summary: summary.trim().to_owned(),
    })
}

/// Management API response for a created entry.
#[derive(Debug, Deserialize)]
struct CreatedEntry {
    sys: ManagementSys,
}

/// System metadata on management API responses.
#[derive(Debug, Deserialize)]
struct ManagementSys {
    id: String,
    version: u32,
}

/// Pushes mission drafts to the management API.
pub struct MissionImporter {
    agent: Agent,
    base_url: String,
    token: String,
}

impl MissionImporter {
    /// Create an importer from validated store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Config`] if the store section is invalid or
    /// `management_token` is missing.
    pub fn from_config(store: &StoreConfig) -> Result<Self, ImportError> {
        store.validate()?;
        let token = store.require_management()?.to_owned();

        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: format!(
                "{}/spaces/{}/environments/{}",
                store.management_host.trim_end_matches('/'),
                store.space_id,
                store.environment
            ),
            token,
        })
    }

    /// Create and publish one mission entry.
    ///
    /// # Errors
    ///
    /// Returns an error if either management call fails; the draft is left
    /// unpublished if the publish step fails.
    pub fn import(&self, draft: &MissionDraft) -> Result<(), ImportError> {
        let created = self.create_entry(draft)?;
        self.publish_entry(draft, &created)
    }

    /// POST the entry-create call.
    fn create_entry(&self, draft: &MissionDraft) -> Result<CreatedEntry, ImportError> {
        let url = format!("{}/entries", self.base_url);
        info!("Creating mission entry {}", draft.number);

        let body = json!({
            "fields": {
                "number": { LOCALE: draft.number },
                "title": { LOCALE: draft.title },
                "date": { LOCALE: draft.date.format("%Y-%m-%d").to_string() },
                "summary": { LOCALE: draft.summary },
            }
        });

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.contentful.management.v1+json")
            .header("X-Contentful-Content-Type", "mission")
            .send_json(&body)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status != 201 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ImportError::Create {
                number: draft.number.clone(),
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }

    /// PUT the publish call for a created entry.
    fn publish_entry(&self, draft: &MissionDraft, created: &CreatedEntry) -> Result<(), ImportError> {
        let url = format!("{}/entries/{}/published", self.base_url, created.sys.id);
        info!("Publishing mission entry {}", draft.number);

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("X-Contentful-Version", &created.sys.version.to_string())
            .send_empty()?;

        let status = response.status().as_u16();

        if status != 200 {
            let error_body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ImportError::Publish {
                number: draft.number.clone(),
                status,
                body: error_body,
            });
        }

        Ok(())
    }
}
