//! Unit tests for the metrics calculator.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{AssetKind, AssetRow};

fn row(name: AssetKind, value: Decimal, return_pct: Decimal, risk_pct: Decimal) -> AssetRow {
    AssetRow {
        name,
        value,
        return_pct,
        risk_pct,
        color: "#000000".to_string(),
    }
}

fn midpoint_rows() -> Vec<AssetRow> {
    AssetKind::ALL
        .iter()
        .map(|kind| row(*kind, dec!(55000), dec!(5.0), dec!(12.5)))
        .collect()
}

// ==================== Overview ====================

#[test]
fn test_midpoint_overview() {
    let overview = portfolio_overview(&midpoint_rows());
    assert_eq!(overview.total_value, dec!(275000));
    assert_eq!(overview.average_return, Some(dec!(5.0)));
    assert_eq!(overview.average_risk, Some(dec!(12.5)));
}

#[test]
fn test_overview_of_empty_rows_uses_sentinels() {
    let overview = portfolio_overview(&[]);
    assert_eq!(overview.total_value, Decimal::ZERO);
    assert_eq!(overview.average_return, None);
    assert_eq!(overview.average_risk, None);
}

#[test]
fn test_averages_of_mixed_rows() {
    let rows = vec![
        row(AssetKind::Stock, dec!(10000), dec!(-15), dec!(5)),
        row(AssetKind::Bond, dec!(30000), dec!(25), dec!(20)),
    ];
    assert_eq!(total_value(&rows), dec!(40000));
    assert_eq!(average_return(&rows), Some(dec!(5)));
    assert_eq!(average_risk(&rows), Some(dec!(12.5)));
}

// ==================== Allocation ====================

#[test]
fn test_midpoint_allocation_is_even() {
    let entries = allocation(&midpoint_rows());
    assert_eq!(entries.len(), 5);
    for entry in &entries {
        assert_eq!(entry.percentage, dec!(20.00));
        assert_eq!(entry.value, dec!(55000));
    }
    assert_eq!(entries[2].asset, AssetKind::RealEstate);
}

#[test]
fn test_allocation_rounds_to_two_places_and_sums_to_hundred() {
    let rows = vec![
        row(AssetKind::Stock, dec!(10000), dec!(0), dec!(5)),
        row(AssetKind::Bond, dec!(10000), dec!(0), dec!(5)),
        row(AssetKind::RealEstate, dec!(10000), dec!(0), dec!(5)),
    ];
    let entries = allocation(&rows);
    assert!(entries.iter().all(|e| e.percentage == dec!(33.33)));

    let sum: Decimal = entries.iter().map(|e| e.percentage).sum();
    assert!((sum - dec!(100)).abs() <= dec!(0.1));
}

#[test]
fn test_allocation_with_zero_total_reports_zero() {
    let rows = vec![
        row(AssetKind::Stock, Decimal::ZERO, dec!(1), dec!(5)),
        row(AssetKind::Bond, Decimal::ZERO, dec!(2), dec!(6)),
    ];
    let entries = allocation(&rows);
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.percentage == Decimal::ZERO));
}

#[test]
fn test_allocation_of_empty_rows_is_empty() {
    assert!(allocation(&[]).is_empty());
}

// ==================== Descriptive statistics ====================

#[test]
fn test_describe_empty_column() {
    let stats = describe(&[]);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.mean, None);
    assert_eq!(stats.std, None);
    assert_eq!(stats.min, None);
    assert_eq!(stats.p50, None);
    assert_eq!(stats.max, None);
}

#[test]
fn test_describe_single_value() {
    let stats = describe(&[dec!(42.5)]);
    assert_eq!(stats.count, 1);
    assert_eq!(stats.mean, Some(dec!(42.5)));
    assert_eq!(stats.std, None);
    assert_eq!(stats.min, Some(dec!(42.5)));
    assert_eq!(stats.max, Some(dec!(42.5)));
    assert_eq!(stats.p25, Some(dec!(42.5)));
    assert_eq!(stats.p75, Some(dec!(42.5)));
}

#[test]
fn test_describe_interpolates_quartiles() {
    // Unsorted on purpose
    let stats = describe(&[dec!(4), dec!(1), dec!(3), dec!(2)]);
    assert_eq!(stats.count, 4);
    assert_eq!(stats.mean, Some(dec!(2.5)));
    assert_eq!(stats.min, Some(dec!(1)));
    assert_eq!(stats.p25, Some(dec!(1.75)));
    assert_eq!(stats.p50, Some(dec!(2.5)));
    assert_eq!(stats.p75, Some(dec!(3.25)));
    assert_eq!(stats.max, Some(dec!(4)));
}

#[test]
fn test_describe_odd_count_median_is_middle_value() {
    let stats = describe(&[dec!(10), dec!(30), dec!(20), dec!(50), dec!(40)]);
    assert_eq!(stats.p25, Some(dec!(20)));
    assert_eq!(stats.p50, Some(dec!(30)));
    assert_eq!(stats.p75, Some(dec!(40)));
}

#[test]
fn test_describe_sample_standard_deviation() {
    // Sample variance of 2,4,4,4,5,5,7,9 is 32/7
    let values = [
        dec!(2),
        dec!(4),
        dec!(4),
        dec!(4),
        dec!(5),
        dec!(5),
        dec!(7),
        dec!(9),
    ];
    let std = describe(&values).std.unwrap();
    assert!((std - dec!(2.138090)).abs() < dec!(0.000001), "std {}", std);
}

#[test]
fn test_describe_constant_column_has_zero_std() {
    let stats = describe(&[dec!(55000), dec!(55000), dec!(55000)]);
    assert_eq!(stats.std, Some(Decimal::ZERO));
}

#[test]
fn test_summary_statistics_covers_each_column() {
    let rows = vec![
        row(AssetKind::Stock, dec!(10000), dec!(-15), dec!(5)),
        row(AssetKind::Bond, dec!(30000), dec!(25), dec!(20)),
    ];
    let summary = summary_statistics(&rows);
    assert_eq!(summary.value.count, 2);
    assert_eq!(summary.value.mean, Some(dec!(20000)));
    assert_eq!(summary.return_pct.min, Some(dec!(-15)));
    assert_eq!(summary.risk_pct.max, Some(dec!(20)));
}
