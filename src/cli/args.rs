//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf init --config <path>
//! - bookshelf serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookshelf - a small, self-hostable book catalog service
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,
    },

    /// Open the store and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
