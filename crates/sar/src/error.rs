//! CLI error types.

use sar_config::ConfigError;
use sar_content::{ContentError, ImportError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),
}
