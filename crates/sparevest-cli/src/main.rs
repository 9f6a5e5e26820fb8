//! SpareVest CLI - Command-line interface for the round-up allocator.
//!
//! # Usage
//!
//! ```bash
//! # Show the portfolio against its targets
//! sparevest --config sparevest.toml summary
//!
//! # Plan a deposit
//! sparevest --config sparevest.toml rebalance --amount 100
//!
//! # Invest the round-up of a ₹47.30 purchase at the ₹10 rule
//! sparevest --config sparevest.toml simulate --purchase 47.30 --rule 10
//!
//! # Write a starter config
//! sparevest template > sparevest.toml
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands, OutputFormat};
use config::SpareVestConfig;
use output::OutputOptions;

fn main() -> Result<()> {
    let Cli {
        config,
        format,
        quiet,
        command,
    } = Cli::parse();

    init_tracing(quiet);

    let load = || load_session(config.as_deref(), format, quiet);

    // Execute command
    match command {
        Commands::Summary => {
            let (config, opts) = load()?;
            commands::summary::execute(&config, opts)?
        }
        Commands::Rebalance(args) => {
            let (config, opts) = load()?;
            commands::rebalance::execute(args, &config, opts)?
        }
        Commands::Simulate(args) => {
            let (config, opts) = load()?;
            commands::simulate::execute(args, &config, opts)?
        }
        Commands::Validate => {
            let (config, opts) = load()?;
            commands::validate::execute(&config, opts)?
        }
        Commands::Template => commands::template::execute()?,
    }

    Ok(())
}

/// Loads the config file and resolves output settings against it.
fn load_session(
    path: Option<&Path>,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<(SpareVestConfig, OutputOptions)> {
    let config = SpareVestConfig::load(path)?;

    // Set up output format
    let opts = OutputOptions {
        format: format.or(config.output.format).unwrap_or_default(),
        precision: config.output.precision,
        quiet,
    };
    Ok((config, opts))
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
