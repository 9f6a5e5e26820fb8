//! Reporting types produced by the allocator.

use serde::{Deserialize, Serialize};

/// Current state of one fund relative to its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundAllocation {
    /// Fund name.
    pub name: String,

    /// Current balance.
    pub current_balance: f64,

    /// Current share of the total, as a fraction.
    pub current_allocation: f64,

    /// Target share, as a fraction.
    pub target_allocation: f64,

    /// Current minus target (fractions). Positive means overweight.
    pub difference: f64,

    /// Current share of the total as a percentage, 0 for an empty portfolio.
    pub percentage_of_total: f64,
}

impl FundAllocation {
    /// Returns true when the fund holds more than its target share.
    #[must_use]
    pub fn is_overweight(&self) -> bool {
        self.difference > 0.0
    }
}

/// One fund's share of a rebalancing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceLine {
    /// Fund name.
    pub name: String,

    /// Signed amount to move into the fund.
    pub dollars_to_add: f64,

    /// This fund's share of the total absolute movement, in percent.
    pub allocation: f64,

    /// Target allocation, in percent.
    pub target_allocation: f64,

    /// Realised share minus target share, in percent.
    pub difference: f64,
}

/// Result of investing a round-up.
///
/// Always produced, whether or not the investment went through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundUpOutcome {
    /// Whether the amount was invested.
    pub success: bool,

    /// Failure message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Amount invested, 0 on failure.
    pub total_invested: f64,

    /// Per-fund breakdown of the investment, empty on failure.
    pub allocation: Vec<RebalanceLine>,

    /// Total balance after the call.
    pub new_total_balance: f64,
}

impl RoundUpOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn invested(amount: f64, allocation: Vec<RebalanceLine>, new_total_balance: f64) -> Self {
        Self {
            success: true,
            error: None,
            total_invested: amount,
            allocation,
            new_total_balance,
        }
    }

    /// Creates a failed outcome; the balance is whatever it was before.
    #[must_use]
    pub fn failed(error: impl Into<String>, unchanged_total: f64) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            total_invested: 0.0,
            allocation: Vec::new(),
            new_total_balance: unchanged_total,
        }
    }
}
