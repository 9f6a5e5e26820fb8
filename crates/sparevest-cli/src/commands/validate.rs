//! Validate command implementation.

use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::SpareVestConfig;
use crate::output::{print_json, print_success, OutputOptions};

/// Loads the portfolio and reports whether it passes validation.
///
/// An invalid portfolio surfaces as an error from [`SpareVestConfig::allocator`].
pub fn execute(config: &SpareVestConfig, opts: OutputOptions) -> Result<()> {
    let allocator = config.allocator()?;
    let funds = allocator.funds().len();
    let total = allocator.total_balance();

    match opts.format {
        OutputFormat::Json => print_json(&json!({
            "valid": true,
            "funds": funds,
            "total_balance": total,
        })),
        OutputFormat::Minimal => {
            println!("ok");
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            print_success(&format!(
                "Portfolio valid: {} funds, total balance {}",
                funds,
                opts.money(total)
            ));
            Ok(())
        }
    }
}
