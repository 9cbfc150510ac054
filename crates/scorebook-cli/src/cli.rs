//! CLI argument definitions for scorebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scorebook")]
#[command(about = "Inspect and query per-group score containers", version)]
pub struct Args {
    /// Config file (TOML); defaults are used when it does not exist
    #[arg(long, value_name = "FILE", default_value = "scorebook.toml")]
    pub config: PathBuf,

    /// Directory holding the per-owner score files
    #[arg(long, value_name = "DIR", env = "SCOREBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Which score file a command works on
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Owner (group) id, resolved under the data directory
    #[arg(long)]
    pub owner: Option<u64>,

    /// Path to a score file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show version and counts of a score file
    Inspect {
        #[command(flatten)]
        source: Source,
    },
    /// Look up a player's scores
    Find {
        #[command(flatten)]
        source: Source,
        /// Player name
        #[arg(short, long)]
        player: String,
        /// Restrict to one beatmap hash
        #[arg(long)]
        hash: Option<String>,
    },
    /// Export a score file as JSON
    Export {
        #[command(flatten)]
        source: Source,
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List owners with a score file in the data directory
    Owners,
}
