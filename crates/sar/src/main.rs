//! SAR CLI - Site content engine.
//!
//! Provides commands for:
//! - `paths`: List resolved page paths
//! - `page`: Fetch a page by slug and render its body to HTML
//! - `announcement`: Show the site announcement
//! - `photos`: List gallery photos
//! - `missions list` / `missions import`: Read and seed mission records

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AnnouncementArgs, MissionsCommand, PageArgs, PathsArgs, PhotosArgs};
use output::Output;

/// SAR - Site content engine.
#[derive(Parser)]
#[command(name = "sar", version, about)]
struct Cli {
    /// Enable verbose (info-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every page's resolved path.
    Paths(PathsArgs),
    /// Fetch a page by slug and render its body to HTML.
    Page(PageArgs),
    /// Show the site announcement.
    Announcement(AnnouncementArgs),
    /// List the photo gallery's images.
    Photos(PhotosArgs),
    /// Mission record commands.
    #[command(subcommand)]
    Missions(MissionsCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Paths(args) => args.execute(),
        Commands::Page(args) => args.execute(),
        Commands::Announcement(args) => args.execute(),
        Commands::Photos(args) => args.execute(),
        Commands::Missions(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
