//! Summary command implementation.
//!
//! Shows each fund's current balance and allocation against its target.

use anyhow::Result;
use sparevest_portfolio::FundAllocation;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::config::SpareVestConfig;
use crate::output::{print_records, OutputOptions};

/// One table row of the allocation summary.
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Fund")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Drift")]
    drift: String,
}

/// Executes the summary command.
pub fn execute(config: &SpareVestConfig, opts: OutputOptions) -> Result<()> {
    let allocator = config.allocator()?;
    let summary = allocator.allocation_summary();

    print_records(&summary, opts, |row: &FundAllocation| SummaryRow {
        name: row.name.clone(),
        balance: opts.money(row.current_balance),
        current: opts.percent(row.percentage_of_total),
        target: opts.percent(row.target_allocation * 100.0),
        drift: opts.percent(row.difference * 100.0),
    })?;

    if opts.format == OutputFormat::Table {
        println!("Total balance: {}", opts.money(allocator.total_balance()));
    }
    Ok(())
}
