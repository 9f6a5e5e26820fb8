//! The portfolio allocator.

use tracing::{debug, info, warn};

use super::validation::validate_funds;
use crate::error::{AllocatorError, AllocatorResult};
use crate::types::{
    default_funds, AllocatorConfig, Fund, FundAllocation, FundDefinition, RebalanceLine,
    RoundUpOutcome, RoundUpRule,
};

/// Owns a set of funds and answers rebalancing questions about new money.
///
/// An allocator starts from the default three-fund template with zero
/// balances. It is a plain value: callers that share one must serialise
/// [`rebalance`](Self::rebalance) and [`update_balances`](Self::update_balances)
/// themselves, or use [`simulate_round_up`](Self::simulate_round_up).
///
/// # Example
///
/// ```rust
/// use sparevest_portfolio::{Allocator, FundDefinition};
///
/// let mut allocator = Allocator::new();
/// allocator.load_portfolio(&[
///     FundDefinition::new("A", 0.5).with_balance(80.0),
///     FundDefinition::new("B", 0.5).with_balance(20.0),
/// ])?;
///
/// assert!(allocator.rebalance(10.0, false).is_err());
/// assert_eq!(allocator.rebalance(10.0, true)?, vec![-25.0, 35.0]);
/// # Ok::<(), sparevest_portfolio::AllocatorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Allocator {
    funds: Vec<Fund>,
    config: AllocatorConfig,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    /// Creates an allocator holding the default template.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AllocatorConfig::default())
    }

    /// Creates an allocator holding the default template with custom validation settings.
    #[must_use]
    pub fn with_config(config: AllocatorConfig) -> Self {
        Self {
            funds: default_funds(),
            config,
        }
    }

    /// Creates an allocator and loads the given definitions into it.
    ///
    /// # Errors
    ///
    /// Fails if the resulting portfolio violates an invariant.
    pub fn from_definitions(
        definitions: &[FundDefinition],
        config: AllocatorConfig,
    ) -> AllocatorResult<Self> {
        let mut allocator = Self::with_config(config);
        allocator.load_portfolio(definitions)?;
        Ok(allocator)
    }

    /// Returns the funds in portfolio order.
    #[must_use]
    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    /// Looks a fund up by name. Returns the first match.
    #[must_use]
    pub fn fund(&self, name: &str) -> Option<&Fund> {
        self.funds.iter().find(|f| f.name == name)
    }

    /// Returns the validation settings.
    #[must_use]
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Replaces the whole fund list with `definitions`.
    ///
    /// An empty slice keeps the current funds. Validation runs either way,
    /// and a rejected set never replaces the current one.
    ///
    /// # Errors
    ///
    /// Returns an invalid-portfolio error (see
    /// [`AllocatorError::is_invalid_portfolio`]) if an invariant is violated.
    pub fn load_portfolio(&mut self, definitions: &[FundDefinition]) -> AllocatorResult<()> {
        if definitions.is_empty() {
            return self.validate_portfolio();
        }

        let candidate: Vec<Fund> = definitions.iter().cloned().map(Fund::from).collect();
        validate_funds(&candidate, &self.config)?;
        self.funds = candidate;

        debug!(
            funds = self.funds.len(),
            total = self.total_balance(),
            "Portfolio loaded"
        );
        Ok(())
    }

    /// Checks the portfolio invariants against the current funds.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule; the target sum is checked before balances.
    pub fn validate_portfolio(&self) -> AllocatorResult<()> {
        validate_funds(&self.funds, &self.config)
    }

    /// Sum of all fund balances.
    #[must_use]
    pub fn total_balance(&self) -> f64 {
        self.funds.iter().map(|f| f.balance).sum()
    }

    /// Each fund's share of the total balance. All zeros for an empty portfolio.
    #[must_use]
    pub fn current_allocation(&self) -> Vec<f64> {
        let total = self.total_balance();
        if total == 0.0 {
            return vec![0.0; self.funds.len()];
        }
        self.funds.iter().map(|f| f.balance / total).collect()
    }

    /// Computes the per-fund deltas that bring every fund to its target share
    /// of `total + amount_to_add`.
    ///
    /// The deltas sum to `amount_to_add` and follow portfolio order. Nothing
    /// is mutated. A negative amount yields a proportional withdrawal plan.
    ///
    /// # Errors
    ///
    /// - [`AllocatorError::InvalidAmount`] if the amount is not finite
    /// - [`AllocatorError::InfeasibleRebalance`] if `allow_negative` is false
    ///   and some fund already holds more than its share of the new total
    pub fn rebalance(&self, amount_to_add: f64, allow_negative: bool) -> AllocatorResult<Vec<f64>> {
        if !amount_to_add.is_finite() {
            return Err(AllocatorError::invalid_amount(
                amount_to_add,
                "amount must be finite",
            ));
        }

        let new_total = self.total_balance() + amount_to_add;
        let deltas: Vec<f64> = self
            .funds
            .iter()
            .map(|f| f.target_amount(new_total) - f.balance)
            .collect();

        if !allow_negative {
            if let Some((fund, &delta)) = self.funds.iter().zip(&deltas).find(|(_, d)| **d < 0.0) {
                return Err(AllocatorError::InfeasibleRebalance {
                    fund: fund.name.clone(),
                    delta,
                });
            }
        }

        debug!(amount = amount_to_add, allow_negative, new_total, "Rebalance computed");
        Ok(deltas)
    }

    /// Per-fund view of the current state against the targets.
    #[must_use]
    pub fn allocation_summary(&self) -> Vec<FundAllocation> {
        let total = self.total_balance();

        self.funds
            .iter()
            .zip(self.current_allocation())
            .map(|(fund, current)| FundAllocation {
                name: fund.name.clone(),
                current_balance: fund.balance,
                current_allocation: current,
                target_allocation: fund.target,
                difference: current - fund.target,
                percentage_of_total: if total > 0.0 {
                    fund.balance / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Runs [`rebalance`](Self::rebalance) and describes how the movement
    /// is split across funds.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`rebalance`](Self::rebalance) unchanged.
    pub fn rebalancing_summary(
        &self,
        amount_to_add: f64,
        allow_negative: bool,
    ) -> AllocatorResult<Vec<RebalanceLine>> {
        let deltas = self.rebalance(amount_to_add, allow_negative)?;
        Ok(self.summarize(&deltas))
    }

    fn summarize(&self, deltas: &[f64]) -> Vec<RebalanceLine> {
        let total_movement: f64 = deltas.iter().map(|d| d.abs()).sum();

        self.funds
            .iter()
            .zip(deltas)
            .map(|(fund, &delta)| {
                let (allocation, difference) = if total_movement > 0.0 {
                    let share = delta.abs() / total_movement;
                    (share * 100.0, (share - fund.target) * 100.0)
                } else {
                    (0.0, 0.0)
                };

                RebalanceLine {
                    name: fund.name.clone(),
                    dollars_to_add: delta,
                    allocation,
                    target_allocation: fund.target * 100.0,
                    difference,
                }
            })
            .collect()
    }

    /// Adds each delta to the matching fund's balance.
    ///
    /// The update is all-or-nothing: if any resulting balance would be
    /// negative, no balance changes.
    ///
    /// # Errors
    ///
    /// - [`AllocatorError::DeltaCountMismatch`] if `deltas` and the funds differ in length
    /// - [`AllocatorError::BalanceInvariantViolated`] if a balance would go negative
    pub fn update_balances(&mut self, deltas: &[f64]) -> AllocatorResult<()> {
        if deltas.len() != self.funds.len() {
            return Err(AllocatorError::DeltaCountMismatch {
                expected: self.funds.len(),
                actual: deltas.len(),
            });
        }

        let updated: Vec<f64> = self
            .funds
            .iter()
            .zip(deltas)
            .map(|(fund, delta)| fund.balance + delta)
            .collect();

        if let Some((fund, &balance)) = self
            .funds
            .iter()
            .zip(&updated)
            .find(|(_, b)| !b.is_finite() || **b < 0.0)
        {
            return Err(AllocatorError::BalanceInvariantViolated {
                name: fund.name.clone(),
                balance,
            });
        }

        for (fund, balance) in self.funds.iter_mut().zip(updated) {
            fund.balance = balance;
        }
        Ok(())
    }

    /// Invests a round-up: strict rebalance, then apply the deltas.
    ///
    /// Never fails. When the strict rebalance is infeasible (or the amount is
    /// invalid) the returned outcome carries the error message and the
    /// portfolio is left untouched.
    pub fn simulate_round_up(&mut self, round_up_amount: f64) -> RoundUpOutcome {
        match self.invest(round_up_amount) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(amount = round_up_amount, error = %err, "Round-up could not be auto-invested");
                RoundUpOutcome::failed(err.to_string(), self.total_balance())
            }
        }
    }

    fn invest(&mut self, amount: f64) -> AllocatorResult<RoundUpOutcome> {
        let deltas = self.rebalance(amount, false)?;
        let allocation = self.summarize(&deltas);
        self.update_balances(&deltas)?;

        let new_total = self.total_balance();
        info!(amount, new_total, "Round-up invested");
        Ok(RoundUpOutcome::invested(amount, allocation, new_total))
    }

    /// Rounds `purchase` up with `rule` and invests the spare change.
    ///
    /// Like [`simulate_round_up`](Self::simulate_round_up), this never fails;
    /// an invalid purchase produces a failed outcome.
    pub fn invest_purchase(&mut self, purchase: f64, rule: &RoundUpRule) -> RoundUpOutcome {
        match rule.round_up(purchase) {
            Ok(spare) => self.simulate_round_up(spare),
            Err(err) => {
                warn!(purchase, error = %err, "Purchase rejected");
                RoundUpOutcome::failed(err.to_string(), self.total_balance())
            }
        }
    }
}
