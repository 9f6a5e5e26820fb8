//! CLI command implementations.

pub mod rebalance;
pub mod simulate;
pub mod summary;
pub mod template;
pub mod validate;

// Re-export submodules for convenience
pub use rebalance::RebalanceArgs;
pub use simulate::SimulateArgs;

use crate::error::{CliError, CliResult};

/// Validates an amount argument. clap happily parses `NaN` and `inf`.
pub fn validate_amount(amount: f64) -> CliResult<f64> {
    if !amount.is_finite() {
        return Err(CliError::InvalidAmount(amount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(2.5).unwrap(), 2.5);
        assert_eq!(validate_amount(-10.0).unwrap(), -10.0);
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::NEG_INFINITY).is_err());
    }
}
