//! `sar missions import` command implementation.

use std::path::PathBuf;

use clap::Args;
use sar_config::Config;
use sar_content::{MissionImporter, parse_missions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the missions import command.
#[derive(Args)]
pub(crate) struct ImportArgs {
    /// Path to the delimited mission file.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ImportArgs {
    /// Execute the missions import command.
    ///
    /// Parses the whole file up front, then creates and publishes entries
    /// one at a time, stopping at the first failure.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let text = std::fs::read_to_string(&self.file)?;
        let drafts = parse_missions(&text)?;
        if drafts.is_empty() {
            output.warning("Nothing to import.");
            return Ok(());
        }

        let config = Config::load(self.config.as_deref())?;
        let store = config.require_store()?;
        let importer = MissionImporter::from_config(store)?;

        output.info(&format!(
            "Importing {} missions from {}...",
            drafts.len(),
            self.file.display()
        ));

        for draft in &drafts {
            importer.import(draft)?;
            output.success(&format!("Imported mission {}", draft.number));
        }

        output.success(&format!("Done: {} missions imported.", drafts.len()));
        Ok(())
    }
}
