use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fansort")]
#[command(author, version, about = "Sorts fansub releases into per-series directories")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Move media files into a subdirectory per series
    Organize {
        /// Directory with media files. Current directory by default
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Show what would be moved without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse a single release file name and print the recovered fields
    Parse {
        /// File name, without its directory path
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
