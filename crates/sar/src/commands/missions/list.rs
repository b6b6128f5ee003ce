//! `sar missions list` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::commands::load_client;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the missions list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Calendar year to list.
    year: i32,

    /// Read draft content from the preview endpoint.
    #[arg(long)]
    preview: bool,

    /// Path to configuration file (default: auto-discover sar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the missions list command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, client) = load_client(self.config.as_deref(), &output)?;

        let missions = client.missions_for_year(self.year, self.preview);
        if missions.is_empty() {
            output.warning(&format!(
                "No missions have been entered for {} so far.",
                self.year
            ));
            return Ok(());
        }

        for mission in &missions {
            output.content(&format!(
                "{}  {}  {}",
                mission.mission_number, mission.date, mission.title
            ));
            output.content(&format!("    {}", mission.summary));
        }
        Ok(())
    }
}
