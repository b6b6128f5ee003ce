//! `sar photos` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

use super::load_client;

/// Arguments for the photos command.
#[derive(Args)]
pub(crate) struct PhotosArgs {
    /// Read draft content from the preview endpoint.
    #[arg(long)]
    preview: bool,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PhotosArgs {
    /// Execute the photos command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, client) = load_client(self.config.as_deref(), &output)?;
        let gallery_id = config.site.require_gallery_id()?;

        let images = client.photos(gallery_id, self.preview);
        if images.is_empty() {
            output.warning("No photos found.");
            return Ok(());
        }

        for image in &images {
            output.content(&format!(
                "{} {}x{} {}",
                image.url, image.width, image.height, image.title
            ));
        }
        Ok(())
    }
}
