//! `sar paths` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

use super::load_client;

/// Arguments for the paths command.
#[derive(Args)]
pub(crate) struct PathsArgs {
    /// Read draft content from the preview endpoint.
    #[arg(long)]
    preview: bool,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PathsArgs {
    /// Execute the paths command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, client) = load_client(self.config.as_deref(), &output)?;

        let paths = client.list_page_paths(self.preview);
        if paths.is_empty() {
            output.warning("No pages found.");
            return Ok(());
        }

        for path in &paths {
            output.content(&format!("/{path}"));
        }
        Ok(())
    }
}
