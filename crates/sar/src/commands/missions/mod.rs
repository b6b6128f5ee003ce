//! Mission commands.

mod import;
mod list;

use clap::Subcommand;

use crate::error::CliError;

pub(crate) use import::ImportArgs;
pub(crate) use list::ListArgs;

/// Mission record commands.
#[derive(Subcommand)]
pub(crate) enum MissionsCommand {
    /// List a year's missions in mission-number order.
    List(ListArgs),
    /// Import missions from a delimited text file and publish them.
    Import(ImportArgs),
}

impl MissionsCommand {
    /// Execute the selected mission command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(),
            Self::Import(args) => args.execute(),
        }
    }
}
