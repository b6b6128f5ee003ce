//! `sar page` command implementation.

use std::path::PathBuf;

use clap::Args;
use sar_richtext::render_document;

use crate::error::CliError;
use crate::output::Output;

use super::load_client;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page slug to fetch.
    slug: String,

    /// Read draft content from the preview endpoint.
    #[arg(long)]
    preview: bool,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PageArgs {
    /// Execute the page command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, client) = load_client(self.config.as_deref(), &output)?;

        let Some(page) = client.page_by_slug(&self.slug, self.preview) else {
            return Err(CliError::NotFound(self.slug));
        };

        output.highlight(&page.title);
        output.content(&render_document(&page.body, &page.images));
        Ok(())
    }
}
