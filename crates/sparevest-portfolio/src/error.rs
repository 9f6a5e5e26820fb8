//! Error types for the allocator.
//!
//! Every error here is a broken precondition, not a transient fault: retrying
//! with the same inputs reproduces the same failure.

use thiserror::Error;

/// Result type for allocator operations.
pub type AllocatorResult<T> = Result<T, AllocatorError>;

/// Errors that can occur during allocator operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocatorError {
    /// Fund targets do not sum to 1.0 within tolerance.
    #[error("Fund targets must sum to 1.0 (got {sum})")]
    TargetSum {
        /// The actual sum of targets.
        sum: f64,
    },

    /// A single fund target is outside [0, 1] or not finite.
    #[error("Fund '{name}' has target {target} outside [0, 1]")]
    TargetOutOfRange {
        /// The fund name.
        name: String,
        /// The offending target.
        target: f64,
    },

    /// A fund balance is negative or not finite.
    #[error("Fund balances must not be negative ('{name}' has {balance})")]
    NegativeBalance {
        /// The fund name.
        name: String,
        /// The offending balance.
        balance: f64,
    },

    /// Two funds share a name.
    #[error("Duplicate fund name '{name}'")]
    DuplicateFund {
        /// The repeated name.
        name: String,
    },

    /// Strict rebalancing would require taking money out of a fund.
    #[error("Must add more money for strictly positive rebalancing ('{fund}' needs {delta})")]
    InfeasibleRebalance {
        /// The first fund with a negative delta.
        fund: String,
        /// That fund's delta.
        delta: f64,
    },

    /// A monetary amount that cannot be allocated.
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// Delta slice does not line up with the fund list.
    #[error("Expected {expected} deltas, got {actual}")]
    DeltaCountMismatch {
        /// Number of funds.
        expected: usize,
        /// Number of deltas supplied.
        actual: usize,
    },

    /// Applying deltas would leave a balance negative.
    #[error("Balance invariant violated after update ('{name}' would be {balance})")]
    BalanceInvariantViolated {
        /// The fund name.
        name: String,
        /// The balance the update would have produced.
        balance: f64,
    },
}

impl AllocatorError {
    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(amount: f64, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            amount,
            reason: reason.into(),
        }
    }

    /// Returns true for errors describing an internally inconsistent fund set.
    #[must_use]
    pub fn is_invalid_portfolio(&self) -> bool {
        matches!(
            self,
            Self::TargetSum { .. }
                | Self::TargetOutOfRange { .. }
                | Self::NegativeBalance { .. }
                | Self::DuplicateFund { .. }
        )
    }

    /// Returns true when a strict top-up cannot reach the target allocation.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleRebalance { .. })
    }
}
