//! Configuration for the allocator.

use serde::{Deserialize, Serialize};

/// Maximum distance between the sum of fund targets and 1.0.
pub const TARGET_SUM_TOLERANCE: f64 = 0.001;

/// Configuration for portfolio validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Reject portfolios in which two funds share a name.
    /// Summaries are keyed by name, so duplicates make them ambiguous.
    pub reject_duplicate_names: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_names: true,
        }
    }
}

impl AllocatorConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether duplicate fund names are accepted.
    #[must_use]
    pub fn with_duplicate_names(mut self, allowed: bool) -> Self {
        self.reject_duplicate_names = !allowed;
        self
    }
}
