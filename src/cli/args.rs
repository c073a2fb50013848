//! CLI argument definitions using clap
//!
//! Commands:
//! - matchgrid serve [--host <host>] [--port <port>]
//! - matchgrid generate [--date <yyyy-mm-dd>] [--seed <n>] [--force-refresh] [--skip-validation]
//! - matchgrid suggest --seed <n>

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// matchgrid - A deterministic daily 3x3 matching-grid generator
#[derive(Parser, Debug)]
#[command(name = "matchgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the grid API server over the bundled sample dataset
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8930)]
        port: u16,
    },

    /// Resolve a date's grid and print the payload as JSON
    Generate {
        /// Puzzle date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Override the date-derived seed
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the cache read
        #[arg(long)]
        force_refresh: bool,

        /// Accept the first selected grid without validating it
        #[arg(long)]
        skip_validation: bool,
    },

    /// Run selector and validator once for a seed and print diagnostics
    Suggest {
        /// Selection seed (defaults to a random one)
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
