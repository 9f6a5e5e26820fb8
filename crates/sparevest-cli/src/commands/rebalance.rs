//! Rebalance command implementation.
//!
//! Plans how a deposit would be split without touching any balance.

use anyhow::Result;
use clap::Args;
use sparevest_portfolio::RebalanceLine;
use tabled::Tabled;

use super::validate_amount;
use crate::config::SpareVestConfig;
use crate::output::{print_records, OutputOptions};

/// Arguments for the rebalance command.
#[derive(Args, Debug)]
pub struct RebalanceArgs {
    /// Amount of new money (negative for a withdrawal)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: f64,

    /// Allow selling down overweight funds
    #[arg(long)]
    pub allow_negative: bool,
}

/// One table row of a rebalancing plan.
#[derive(Tabled)]
pub(crate) struct PlanRow {
    #[tabled(rename = "Fund")]
    pub name: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Share")]
    pub share: String,
    #[tabled(rename = "Target")]
    pub target: String,
    #[tabled(rename = "Difference")]
    pub difference: String,
}

impl PlanRow {
    pub(crate) fn from_line(line: &RebalanceLine, opts: OutputOptions) -> Self {
        Self {
            name: line.name.clone(),
            amount: opts.money(line.dollars_to_add),
            share: opts.percent(line.allocation),
            target: opts.percent(line.target_allocation),
            difference: opts.percent(line.difference),
        }
    }
}

/// Executes the rebalance command.
pub fn execute(args: RebalanceArgs, config: &SpareVestConfig, opts: OutputOptions) -> Result<()> {
    let amount = validate_amount(args.amount)?;
    let allocator = config.allocator()?;

    let plan = allocator.rebalancing_summary(amount, args.allow_negative)?;
    print_records(&plan, opts, |line| PlanRow::from_line(line, opts))
}
