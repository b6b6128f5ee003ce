//! `sar announcement` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

use super::load_client;

/// Arguments for the announcement command.
#[derive(Args)]
pub(crate) struct AnnouncementArgs {
    /// Read draft content from the preview endpoint.
    #[arg(long)]
    preview: bool,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl AnnouncementArgs {
    /// Execute the announcement command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, client) = load_client(self.config.as_deref(), &output)?;
        let id = config.site.require_announcement_id()?;

        // A missing announcement suppresses the banner; it is not an error.
        let Some(announcement) = client.announcement(id, self.preview) else {
            output.warning("No announcement found.");
            return Ok(());
        };

        if announcement.visible {
            output.content(&announcement.message);
        } else {
            output.warning("Announcement is hidden:");
            output.content(&announcement.message);
        }
        Ok(())
    }
}
