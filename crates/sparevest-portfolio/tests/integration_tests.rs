//! Integration tests for sparevest-portfolio.
//!
//! These tests walk through the end-to-end round-up scenarios.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sparevest_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// The demo portfolio: 950 split exactly 60/25/15.
fn demo_definitions() -> Vec<FundDefinition> {
    vec![
        FundDefinition::new("USDT Stable Fund", 0.6).with_balance(570.0),
        FundDefinition::new("Growth Fund", 0.25).with_balance(237.5),
        FundDefinition::new("Conservative Fund", 0.15).with_balance(142.5),
    ]
}

fn balances(allocator: &Allocator) -> Vec<f64> {
    allocator.funds().iter().map(|f| f.balance).collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_round_up_on_balanced_portfolio() {
    let mut allocator = Allocator::new();
    allocator.load_portfolio(&demo_definitions()).unwrap();
    assert_relative_eq!(allocator.total_balance(), 950.0);

    let outcome = allocator.simulate_round_up(2.5);

    assert!(outcome.success);
    assert_eq!(outcome.total_invested, 2.5);

    let deltas: Vec<f64> = outcome.allocation.iter().map(|l| l.dollars_to_add).collect();
    for (actual, expected) in deltas.iter().zip([1.5, 0.625, 0.375]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }

    for (actual, expected) in balances(&allocator).iter().zip([571.5, 238.125, 142.875]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(outcome.new_total_balance, 952.5, epsilon = 1e-9);

    // Movement is split exactly along the targets
    for line in &outcome.allocation {
        assert_abs_diff_eq!(line.difference, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_first_deposit_into_empty_template() {
    let mut allocator = Allocator::new();
    allocator.load_portfolio(&[]).unwrap();

    let deltas = allocator.rebalance(100.0, false).unwrap();

    assert_relative_eq!(deltas[0], 60.0);
    assert_relative_eq!(deltas[1], 25.0);
    assert_relative_eq!(deltas[2], 15.0);
}

#[test]
fn test_targets_must_sum_to_one() {
    let mut allocator = Allocator::new();
    let err = allocator
        .load_portfolio(&[
            FundDefinition::new("A", 0.5).with_balance(0.0),
            FundDefinition::new("B", 0.4).with_balance(0.0),
        ])
        .unwrap_err();

    assert!(matches!(err, AllocatorError::TargetSum { .. }));
    assert!(err.is_invalid_portfolio());

    let err = allocator
        .load_portfolio(&[FundDefinition::new("A", 0.6), FundDefinition::new("B", 0.5)])
        .unwrap_err();
    assert!(matches!(err, AllocatorError::TargetSum { .. }));
}

#[test]
fn test_negative_balance_rejected() {
    let mut allocator = Allocator::new();
    let err = allocator
        .load_portfolio(&[
            FundDefinition::new("A", 0.5).with_balance(-10.0),
            FundDefinition::new("B", 0.5).with_balance(10.0),
        ])
        .unwrap_err();

    assert!(matches!(err, AllocatorError::NegativeBalance { .. }));
    // Previous template is still in place
    assert_eq!(allocator.funds().len(), 3);
}

#[test]
fn test_overweight_fund_blocks_strict_top_up() {
    let allocator = Allocator::from_definitions(
        &[
            FundDefinition::new("A", 0.5).with_balance(80.0),
            FundDefinition::new("B", 0.5).with_balance(20.0),
        ],
        AllocatorConfig::default(),
    )
    .unwrap();

    let err = allocator.rebalance(10.0, false).unwrap_err();
    assert!(err.is_infeasible());

    let deltas = allocator.rebalance(10.0, true).unwrap();
    assert_eq!(deltas, vec![-25.0, 35.0]);
    assert_relative_eq!(deltas.iter().sum::<f64>(), 10.0);
}

#[test]
fn test_failed_round_up_then_larger_round_up() {
    let mut allocator = Allocator::from_definitions(
        &[
            FundDefinition::new("A", 0.5).with_balance(80.0),
            FundDefinition::new("B", 0.5).with_balance(20.0),
        ],
        AllocatorConfig::default(),
    )
    .unwrap();

    let outcome = allocator.simulate_round_up(10.0);
    assert!(!outcome.success);
    assert_eq!(outcome.new_total_balance, 100.0);
    assert_eq!(balances(&allocator), vec![80.0, 20.0]);

    // 60 more is just enough to lift B to A's level
    let outcome = allocator.simulate_round_up(60.0);
    assert!(outcome.success);
    assert_eq!(balances(&allocator), vec![80.0, 80.0]);
    assert_eq!(outcome.new_total_balance, 160.0);
}

#[test]
fn test_sequence_of_purchases() {
    let mut allocator = Allocator::new();
    let rule = RoundUpRule::TEN;

    let mut invested = 0.0;
    for purchase in [47.30, 128.0, 9.99, 33.33] {
        let outcome = allocator.invest_purchase(purchase, &rule);
        assert!(outcome.success, "purchase {purchase} failed: {:?}", outcome.error);
        invested += outcome.total_invested;
    }

    // 2.70 + 2.00 + 0.01 + 6.67
    assert_abs_diff_eq!(invested, 11.38, epsilon = 1e-9);
    assert_abs_diff_eq!(allocator.total_balance(), 11.38, epsilon = 1e-9);

    let summary = allocator.allocation_summary();
    for row in &summary {
        assert_abs_diff_eq!(row.difference, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_load_from_json_export() {
    let json = r#"[
        {"Fund": "USDT Stable Fund", "Target": 0.6, "Balance": 570},
        {"Fund": "Growth Fund", "Target": 0.25, "Balance": 237.5},
        {"Fund": "Conservative Fund", "Target": 0.15}
    ]"#;
    let definitions: Vec<FundDefinition> = serde_json::from_str(json).unwrap();

    let allocator = Allocator::from_definitions(&definitions, AllocatorConfig::default()).unwrap();
    assert_relative_eq!(allocator.total_balance(), 807.5);
    assert_eq!(allocator.funds()[2].balance, 0.0);
}

#[test]
fn test_duplicate_names_policy() {
    let definitions = [FundDefinition::new("A", 0.5), FundDefinition::new("A", 0.5)];

    let err = Allocator::from_definitions(&definitions, AllocatorConfig::default()).unwrap_err();
    assert!(matches!(err, AllocatorError::DuplicateFund { .. }));

    let allocator =
        Allocator::from_definitions(&definitions, AllocatorConfig::new().with_duplicate_names(true))
            .unwrap();
    assert_eq!(allocator.funds().len(), 2);
}
