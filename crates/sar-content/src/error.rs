//! Error types for content store access.

/// Error from content store operations.
///
/// Read operations absorb `HttpRequest`/`HttpResponse` internally and degrade
/// to empty results; these variants cross the public boundary only from the
/// importer and from client construction.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Invalid or missing store configuration.
    #[error("configuration error: {0}")]
    Config(#[from] sar_config::ConfigError),
}
