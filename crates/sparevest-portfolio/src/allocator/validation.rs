//! Portfolio invariant checks.

use std::collections::HashSet;

use crate::error::{AllocatorError, AllocatorResult};
use crate::types::{AllocatorConfig, Fund, TARGET_SUM_TOLERANCE};

/// Validates a fund set, failing on the first violated rule.
///
/// Rules are checked in this order:
/// 1. targets sum to 1.0 within [`TARGET_SUM_TOLERANCE`]
/// 2. each target is finite and within [0, 1]
/// 3. no balance is negative or non-finite
/// 4. names are unique (only when the config rejects duplicates)
///
/// # Errors
///
/// Returns the [`AllocatorError`] for the first rule that fails.
pub fn validate_funds(funds: &[Fund], config: &AllocatorConfig) -> AllocatorResult<()> {
    let sum: f64 = funds.iter().map(|f| f.target).sum();
    if sum.is_nan() || (sum - 1.0).abs() > TARGET_SUM_TOLERANCE {
        return Err(AllocatorError::TargetSum { sum });
    }

    if let Some(fund) = funds
        .iter()
        .find(|f| !f.target.is_finite() || !(0.0..=1.0).contains(&f.target))
    {
        return Err(AllocatorError::TargetOutOfRange {
            name: fund.name.clone(),
            target: fund.target,
        });
    }

    if let Some(fund) = funds
        .iter()
        .find(|f| !f.balance.is_finite() || f.balance < 0.0)
    {
        return Err(AllocatorError::NegativeBalance {
            name: fund.name.clone(),
            balance: fund.balance,
        });
    }

    if config.reject_duplicate_names {
        let mut seen: HashSet<&str> = HashSet::with_capacity(funds.len());
        for fund in funds {
            if !seen.insert(&fund.name) {
                return Err(AllocatorError::DuplicateFund {
                    name: fund.name.clone(),
                });
            }
        }
    }

    Ok(())
}
