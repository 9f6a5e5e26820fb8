//! # SpareVest Portfolio
//!
//! Round-up allocation engine for a micro-investing portfolio.
//!
//! A portfolio is an ordered set of funds, each with a target fraction and a
//! current balance. When new money arrives, the [`Allocator`] works out how
//! much each fund must receive so that every fund lands exactly on its target
//! share of the new total.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: an [`Allocator`] is a plain owned value, no globals
//! - **Validated composition**: targets sum to 1.0 (±0.001) and balances are
//!   never negative, checked on every load and balance update
//! - **Strict by default**: a top-up that would need to take money out of an
//!   overweight fund is an error, not a silent clamp
//!
//! ## Quick Start
//!
//! ```rust
//! use sparevest_portfolio::prelude::*;
//!
//! let mut allocator = Allocator::new();
//! allocator.load_portfolio(&[
//!     FundDefinition::new("USDT Stable Fund", 0.6).with_balance(570.0),
//!     FundDefinition::new("Growth Fund", 0.25).with_balance(237.5),
//!     FundDefinition::new("Conservative Fund", 0.15).with_balance(142.5),
//! ])?;
//!
//! let outcome = allocator.simulate_round_up(2.5);
//! assert!(outcome.success);
//! assert!((outcome.new_total_balance - 952.5).abs() < 1e-9);
//! # Ok::<(), AllocatorError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`allocator`] - The [`Allocator`] and invariant checks
//! - [`types`] - Funds, summaries, round-up rules and configuration
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod allocator;
pub mod error;
pub mod types;

pub use error::{AllocatorError, AllocatorResult};

pub use allocator::{validate_funds, Allocator};

pub use types::{
    default_funds, AllocatorConfig, Fund, FundAllocation, FundDefinition, RebalanceLine,
    RoundUpOutcome, RoundUpRule, TARGET_SUM_TOLERANCE,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sparevest_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::allocator::Allocator;
    pub use crate::error::{AllocatorError, AllocatorResult};
    pub use crate::types::{
        AllocatorConfig, Fund, FundAllocation, FundDefinition, RebalanceLine, RoundUpOutcome,
        RoundUpRule,
    };
}
