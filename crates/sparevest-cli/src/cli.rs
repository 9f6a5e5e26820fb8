//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{RebalanceArgs, SimulateArgs};

/// SpareVest - Round-up portfolio allocator
#[derive(Parser)]
#[command(name = "sparevest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Portfolio configuration file (TOML or JSON)
    #[arg(short, long, env = "SPAREVEST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format [default: table, or the config file's choice]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show each fund's balance against its target
    Summary,

    /// Plan how a deposit would be split across funds
    Rebalance(RebalanceArgs),

    /// Invest a round-up and show the resulting portfolio
    Simulate(SimulateArgs),

    /// Check that the portfolio file is valid
    Validate,

    /// Print a starter configuration file
    Template,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
