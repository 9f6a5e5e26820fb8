//! Fund types.

use serde::{Deserialize, Serialize};

/// A named allocation bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Identifying label.
    pub name: String,

    /// Fraction of the total portfolio this fund should hold, in [0, 1].
    pub target: f64,

    /// Current monetary amount held.
    pub balance: f64,
}

impl Fund {
    /// Creates a fund with a starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, target: f64, balance: f64) -> Self {
        Self {
            name: name.into(),
            target,
            balance,
        }
    }

    /// Creates an empty fund.
    #[must_use]
    pub fn empty(name: impl Into<String>, target: f64) -> Self {
        Self::new(name, target, 0.0)
    }

    /// Amount this fund should hold out of `total`.
    #[must_use]
    pub fn target_amount(&self, total: f64) -> f64 {
        self.target * total
    }
}

/// Caller-supplied fund record accepted by
/// [`Allocator::load_portfolio`](crate::Allocator::load_portfolio).
///
/// Also deserializes from the capitalised `Fund`/`Target`/`Balance` column
/// names used by spreadsheet exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundDefinition {
    /// Fund name.
    #[serde(alias = "Fund", alias = "Name")]
    pub name: String,

    /// Target fraction.
    #[serde(alias = "Target")]
    pub target: f64,

    /// Starting balance, 0 when absent.
    #[serde(default, alias = "Balance", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl FundDefinition {
    /// Creates a definition without a starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
            balance: None,
        }
    }

    /// Sets the starting balance.
    #[must_use]
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }
}

impl From<FundDefinition> for Fund {
    fn from(def: FundDefinition) -> Self {
        Fund::new(def.name, def.target, def.balance.unwrap_or(0.0))
    }
}

impl From<&Fund> for FundDefinition {
    fn from(fund: &Fund) -> Self {
        FundDefinition::new(fund.name.clone(), fund.target).with_balance(fund.balance)
    }
}

/// The three-fund template every new allocator starts from.
#[must_use]
pub fn default_funds() -> Vec<Fund> {
    vec![
        Fund::empty("USDT Stable Fund", 0.60),
        Fund::empty("Growth Fund", 0.25),
        Fund::empty("Conservative Fund", 0.15),
    ]
}
