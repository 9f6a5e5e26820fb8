//! The allocator and its invariant checks.

#[allow(clippy::module_inception)]
mod allocator;
mod validation;

pub use allocator::Allocator;
pub use validation::validate_funds;
