use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytmeta")]
#[command(author, version, about = "Local metadata for youtube-dl / yt-dlp downloads")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Refresh one item from its sidecar and print the result as JSON
    Show {
        /// Video file (or folder item) to refresh
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Select the primary image for an item
    Image {
        /// Video file (or folder item)
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Report whether an item's sidecar changed since a point in time
    Changed {
        /// Video file (or folder item)
        #[arg(required = true)]
        path: PathBuf,

        /// Last time the item was saved (RFC 3339)
        #[arg(long)]
        since: String,
    },

    /// Refresh every video with a sidecar under a directory
    Scan {
        /// Directory to scan
        #[arg(required = true)]
        dir: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
