//! Content store HTTP client.
//!
//! Builds authenticated request URLs against the store's delivery and
//! preview endpoints, issues blocking GETs, and decodes JSON. The preview
//! flag selects the preview host and preview token together; the delivery
//! pair is used otherwise. No retries; the agent's global timeout is the
//! only transport policy.

mod announcements;
mod galleries;
mod missions;
mod pages;

use std::collections::BTreeMap;
use std::fmt::Write;
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use sar_config::StoreConfig;
use serde::de::DeserializeOwned;
use tracing::warn;
use ureq::Agent;

use crate::error::ContentError;
use crate::types::EntriesResponse;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Query component unreserved characters: A-Z a-z 0-9 - . _ ~
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a query parameter name or value.
fn query_encode(input: &str) -> String {
    percent_encode(input.as_bytes(), QUERY_ENCODE_SET).to_string()
}

/// Named store endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Typed entry records.
    Entries,
    /// Stored binaries with metadata.
    Assets,
}

impl Endpoint {
    /// Path segment of this endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Assets => "assets",
        }
    }
}

/// Content store client.
#[derive(Debug)]
pub struct ContentClient {
    agent: Agent,
    space_id: String,
    environment: String,
    delivery_host: String,
    delivery_token: String,
    preview_host: String,
    preview_token: String,
}

impl ContentClient {
    /// Create a client from validated store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if required configuration values are
    /// missing or malformed. This is the one failure that surfaces loudly:
    /// it indicates a deployment mistake, not a transient condition.
    pub fn from_config(store: &StoreConfig) -> Result<Self, ContentError> {
        store.validate()?;

        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            space_id: store.space_id.clone(),
            environment: store.environment.clone(),
            delivery_host: store.delivery_host.trim_end_matches('/').to_owned(),
            delivery_token: store.delivery_token.clone(),
            preview_host: store.preview_host.trim_end_matches('/').to_owned(),
            preview_token: store.preview_token.clone(),
        })
    }

    /// Build a fully-qualified request URL for a named endpoint.
    ///
    /// Parameters are appended in map order (deterministic), keys and values
    /// percent-encoded. The preview flag selects the host/token pair.
    #[must_use]
    pub fn endpoint_url(
        &self,
        endpoint: Endpoint,
        params: &BTreeMap<&str, String>,
        preview: bool,
    ) -> String {
        let (host, token) = if preview {
            (&self.preview_host, &self.preview_token)
        } else {
            (&self.delivery_host, &self.delivery_token)
        };

        let mut url = format!(
            "{host}/spaces/{}/environments/{}/{}?access_token={}",
            self.space_id,
            self.environment,
            endpoint.as_str(),
            query_encode(token)
        );
        for (key, value) in params {
            write!(url, "&{}={}", query_encode(key), query_encode(value)).unwrap();
        }
        url
    }

    /// Execute a GET and decode the JSON response body.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ContentError> {
        let response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ContentError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }

    /// Fetch an entries query, absorbing failures into an empty response.
    pub(crate) fn fetch_entries<F: DeserializeOwned>(
        &self,
        params: &BTreeMap<&str, String>,
        preview: bool,
        what: &str,
    ) -> EntriesResponse<F> {
        let url = self.endpoint_url(Endpoint::Entries, params, preview);
        absorb(self.get_json(&url), what)
    }
}

/// Degrade a failed fetch to the empty response.
///
/// Transport errors, non-success statuses, and shape mismatches all land
/// here: the condition is logged and the caller sees an empty result, never
/// a raised error.
pub(crate) fn absorb<F>(
    result: Result<EntriesResponse<F>, ContentError>,
    what: &str,
) -> EntriesResponse<F> {
    match result {
        Ok(response) => response,
        Err(err) => {
            warn!("fetching {what} failed: {err}");
            EntriesResponse::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sar_config::StoreConfig;

    pub(crate) fn test_store_config() -> StoreConfig {
        StoreConfig {
            space_id: "space123".to_owned(),
            environment: "master".to_owned(),
            delivery_token: "live-token".to_owned(),
            preview_token: "draft-token".to_owned(),
            delivery_host: "https://cdn.example.com".to_owned(),
            preview_host: "https://preview.example.com".to_owned(),
            management_token: None,
            management_host: "https://api.example.com".to_owned(),
        }
    }

    pub(crate) fn test_client() -> ContentClient {
        ContentClient::from_config(&test_store_config()).unwrap()
    }

    #[test]
    fn test_from_config_rejects_empty_token() {
        let store = StoreConfig {
            delivery_token: String::new(),
            ..test_store_config()
        };
        let err = ContentClient::from_config(&store).unwrap_err();
        assert!(matches!(err, ContentError::Config(_)));
    }

    #[test]
    fn test_endpoint_url_delivery_pair() {
        let client = test_client();
        let url = client.endpoint_url(Endpoint::Entries, &BTreeMap::new(), false);
        assert_eq!(
            url,
            "https://cdn.example.com/spaces/space123/environments/master/entries?access_token=live-token"
        );
    }

    #[test]
    fn test_endpoint_url_preview_pair() {
        let client = test_client();
        let url = client.endpoint_url(Endpoint::Assets, &BTreeMap::new(), true);
        assert_eq!(
            url,
            "https://preview.example.com/spaces/space123/environments/master/assets?access_token=draft-token"
        );
    }

    #[test]
    fn test_endpoint_url_never_cross_wires_host_and_token() {
        let client = test_client();
        let live = client.endpoint_url(Endpoint::Entries, &BTreeMap::new(), false);
        let draft = client.endpoint_url(Endpoint::Entries, &BTreeMap::new(), true);
        assert!(live.contains("cdn.example.com") && live.contains("live-token"));
        assert!(!live.contains("draft-token"));
        assert!(draft.contains("preview.example.com") && draft.contains("draft-token"));
        assert!(!draft.contains("live-token"));
    }

    #[test]
    fn test_endpoint_url_encodes_params() {
        let client = test_client();
        let mut params = BTreeMap::new();
        params.insert("fields.slug", "search & rescue".to_owned());
        params.insert("limit", "1".to_owned());

        let url = client.endpoint_url(Endpoint::Entries, &params, false);

        assert!(url.contains("&fields.slug=search%20%26%20rescue"));
        assert!(url.contains("&limit=1"));
    }

    #[test]
    fn test_endpoint_url_param_order_is_deterministic() {
        let client = test_client();
        let mut params = BTreeMap::new();
        params.insert("select", "fields.slug".to_owned());
        params.insert("content_type", "page".to_owned());

        let url = client.endpoint_url(Endpoint::Entries, &params, false);

        // BTreeMap iterates in key order regardless of insertion order.
        let content_type_at = url.find("content_type=page").unwrap();
        let select_at = url.find("select=fields.slug").unwrap();
        assert!(content_type_at < select_at);
    }

    #[test]
    fn test_absorb_http_error_degrades_to_empty() {
        let result: Result<EntriesResponse<serde_json::Value>, ContentError> =
            Err(ContentError::HttpResponse {
                status: 500,
                body: "boom".to_owned(),
            });
        let response = absorb(result, "pages");
        assert!(response.items.is_empty());
        assert!(response.includes.is_none());
    }

    #[test]
    fn test_absorb_passes_success_through() {
        let response: EntriesResponse<serde_json::Value> = serde_json::from_value(
            serde_json::json!({"items": [{"sys": {"id": "x"}, "fields": {}}]}),
        )
        .unwrap();
        let passed = absorb(Ok(response), "pages");
        assert_eq!(passed.items.len(), 1);
    }
}
