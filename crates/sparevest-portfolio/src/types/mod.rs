//! Core types for the allocator.

mod config;
mod fund;
mod round_up;
mod summary;

pub use config::{AllocatorConfig, TARGET_SUM_TOLERANCE};
pub use fund::{default_funds, Fund, FundDefinition};
pub use round_up::RoundUpRule;
pub use summary::{FundAllocation, RebalanceLine, RoundUpOutcome};
