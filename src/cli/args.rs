//! CLI argument definitions using clap
//!
//! Usage:
//! - deedbook [--principal <uuid>] [--height <n>] [--input <path>]

use clap::Parser;
use std::path::PathBuf;

/// deedbook - A strict, deterministic registry for real-estate document records
#[derive(Parser, Debug)]
#[command(name = "deedbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Caller principal as a UUID; a fresh one is generated when omitted
    #[arg(long)]
    pub principal: Option<String>,

    /// Starting block height; increments by one per request
    #[arg(long, default_value_t = 1)]
    pub height: u64,

    /// Request file with one JSON request per line; stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
