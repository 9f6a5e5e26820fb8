//! Round-up rules.
//!
//! A purchase is rounded up to the next multiple of the rule's increment and
//! the difference (the spare change) is what gets invested. Arithmetic is done
//! in whole cents so that `47.30` at a ₹10 rule yields exactly `2.70`.

use serde::{Deserialize, Serialize};

use crate::error::{AllocatorError, AllocatorResult};

/// Rounds purchases up to a fixed increment.
///
/// The increment is held at whole-cent precision. Deserialization goes through
/// [`RoundUpRule::new`], so a stored rule can never carry a sub-cent step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RuleRepr", into = "RuleRepr")]
pub struct RoundUpRule {
    increment: f64,
}

/// Wire shape of a [`RoundUpRule`].
#[derive(Serialize, Deserialize)]
struct RuleRepr {
    increment: f64,
}

impl TryFrom<RuleRepr> for RoundUpRule {
    type Error = AllocatorError;

    fn try_from(repr: RuleRepr) -> AllocatorResult<Self> {
        Self::new(repr.increment)
    }
}

impl From<RoundUpRule> for RuleRepr {
    fn from(rule: RoundUpRule) -> Self {
        Self {
            increment: rule.increment,
        }
    }
}

impl RoundUpRule {
    /// Round up to the nearest ₹5.
    pub const FIVE: Self = Self { increment: 5.0 };
    /// Round up to the nearest ₹10.
    pub const TEN: Self = Self { increment: 10.0 };
    /// Round up to the nearest ₹50.
    pub const FIFTY: Self = Self { increment: 50.0 };

    /// Creates a rule for the given increment.
    ///
    /// # Errors
    ///
    /// Returns [`AllocatorError::InvalidAmount`] if the increment is not
    /// finite or is smaller than one cent.
    pub fn new(increment: f64) -> AllocatorResult<Self> {
        if !increment.is_finite() {
            return Err(AllocatorError::invalid_amount(
                increment,
                "round-up increment must be finite",
            ));
        }

        let step = to_cents(increment);
        if step < 1.0 {
            return Err(AllocatorError::invalid_amount(
                increment,
                "round-up increment must be at least 0.01",
            ));
        }
        Ok(Self {
            increment: step / 100.0,
        })
    }

    /// Round up to the nearest whole unit.
    #[must_use]
    pub fn nearest_rupee() -> Self {
        Self { increment: 1.0 }
    }

    /// The increment purchases are rounded up to, in whole cents.
    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Spare change produced by a purchase. Exact multiples produce 0.
    ///
    /// # Errors
    ///
    /// Returns [`AllocatorError::InvalidAmount`] for negative or non-finite
    /// purchases.
    pub fn round_up(&self, purchase: f64) -> AllocatorResult<f64> {
        if !purchase.is_finite() || purchase < 0.0 {
            return Err(AllocatorError::invalid_amount(
                purchase,
                "purchase must be a non-negative finite amount",
            ));
        }

        let cents = to_cents(purchase);
        let step = to_cents(self.increment);
        let rounded = (cents / step).ceil() * step;
        Ok((rounded - cents) / 100.0)
    }
}

impl Default for RoundUpRule {
    fn default() -> Self {
        Self::TEN
    }
}

fn to_cents(amount: f64) -> f64 {
    (amount * 100.0).round()
}
