//! Simulate command implementation.
//!
//! Invests a round-up into the loaded portfolio. A round-up that cannot be
//! invested is reported as a notice, not a failure of the command.

use anyhow::Result;
use clap::Args;
use sparevest_portfolio::{RoundUpOutcome, RoundUpRule};

use super::rebalance::PlanRow;
use super::validate_amount;
use crate::cli::OutputFormat;
use crate::config::SpareVestConfig;
use crate::output::{
    print_header, print_info, print_json, print_records, print_success, print_table,
    print_warning, KeyValue, OutputOptions,
};

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Round-up amount to invest
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        conflicts_with = "purchase",
        required_unless_present = "purchase"
    )]
    pub amount: Option<f64>,

    /// Purchase amount to round up instead of a direct round-up
    #[arg(short, long)]
    pub purchase: Option<f64>,

    /// Increment purchases are rounded up to (1, 5, 10, 50, ...)
    #[arg(short, long, default_value_t = 10.0, requires = "purchase")]
    pub rule: f64,
}

/// Executes the simulate command.
pub fn execute(args: SimulateArgs, config: &SpareVestConfig, opts: OutputOptions) -> Result<()> {
    let mut allocator = config.allocator()?;

    let outcome = match (args.purchase, args.amount) {
        (Some(purchase), _) => {
            let rule = RoundUpRule::new(args.rule)?;
            allocator.invest_purchase(purchase, &rule)
        }
        (None, Some(amount)) => allocator.simulate_round_up(validate_amount(amount)?),
        (None, None) => anyhow::bail!("either --amount or --purchase is required"),
    };

    if let Some(error) = &outcome.error {
        print_warning(&format!("Round-up could not be auto-invested: {error}"));
    }

    match opts.format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Csv => print_records(&outcome.allocation, opts, |line| {
            PlanRow::from_line(line, opts)
        }),
        OutputFormat::Minimal => {
            println!("{}", outcome.new_total_balance);
            Ok(())
        }
        OutputFormat::Table => print_outcome_table(&outcome, opts),
    }
}

fn print_outcome_table(outcome: &RoundUpOutcome, opts: OutputOptions) -> Result<()> {
    if outcome.success {
        print_success(&format!("Invested {}", opts.money(outcome.total_invested)));
        print_header("Allocation");
        let rows: Vec<PlanRow> = outcome
            .allocation
            .iter()
            .map(|line| PlanRow::from_line(line, opts))
            .collect();
        print_table(&rows)?;
    } else {
        print_info(opts, "Portfolio left unchanged");
    }

    print_table(&[
        KeyValue::new("Invested", opts.money(outcome.total_invested)),
        KeyValue::new("New total balance", opts.money(outcome.new_total_balance)),
    ])
}
