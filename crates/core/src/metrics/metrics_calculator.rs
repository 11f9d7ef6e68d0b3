//! Pure reductions over asset rows.
//!
//! Degenerate inputs (no rows, zero total) produce sentinels instead of
//! errors: zero totals, zero percentages, or `None`.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::assets::AssetRow;
use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};

use super::{AllocationEntry, DescriptiveStatistics, PortfolioOverview, SummaryStatistics};

pub fn total_value(rows: &[AssetRow]) -> Decimal {
    rows.iter().map(|r| r.value).sum()
}

pub fn average_return(rows: &[AssetRow]) -> Option<Decimal> {
    mean(rows.iter().map(|r| r.return_pct))
}

pub fn average_risk(rows: &[AssetRow]) -> Option<Decimal> {
    mean(rows.iter().map(|r| r.risk_pct))
}

pub fn portfolio_overview(rows: &[AssetRow]) -> PortfolioOverview {
    PortfolioOverview {
        total_value: total_value(rows),
        average_return: average_return(rows),
        average_risk: average_risk(rows),
    }
}

/// Computes each row's percentage of the total value, rounded for display.
/// Every row reports zero when the total is zero.
pub fn allocation(rows: &[AssetRow]) -> Vec<AllocationEntry> {
    let total = total_value(rows);
    rows.iter()
        .map(|row| {
            let percentage = if total > Decimal::ZERO {
                (row.value / total * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };
            AllocationEntry {
                asset: row.name,
                value: row.value,
                percentage,
            }
        })
        .collect()
}

pub fn summary_statistics(rows: &[AssetRow]) -> SummaryStatistics {
    let values: Vec<Decimal> = rows.iter().map(|r| r.value).collect();
    let returns: Vec<Decimal> = rows.iter().map(|r| r.return_pct).collect();
    let risks: Vec<Decimal> = rows.iter().map(|r| r.risk_pct).collect();

    SummaryStatistics {
        value: describe(&values),
        return_pct: describe(&returns),
        risk_pct: describe(&risks),
    }
}

pub fn describe(values: &[Decimal]) -> DescriptiveStatistics {
    if values.is_empty() {
        return DescriptiveStatistics::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    DescriptiveStatistics {
        count: values.len(),
        mean: mean(values.iter().copied()),
        std: sample_std_dev(values),
        min: sorted.first().copied(),
        p25: quartile(&sorted, 1),
        p50: quartile(&sorted, 2),
        p75: quartile(&sorted, 3),
        max: sorted.last().copied(),
    }
}

fn mean<I>(values: I) -> Option<Decimal>
where
    I: Iterator<Item = Decimal>,
{
    let (sum, count) = values.fold((Decimal::ZERO, 0usize), |(sum, count), v| {
        (sum + v, count + 1)
    });
    if count == 0 {
        return None;
    }
    Some((sum / Decimal::from(count)).round_dp(DECIMAL_PRECISION))
}

/// Standard deviation with one degree of freedom removed.
fn sample_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }

    let count = Decimal::from(values.len());
    let sum: Decimal = values.iter().sum();
    let mean = sum / count;

    let sum_squared_diff: Decimal = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();

    let variance = sum_squared_diff / (count - Decimal::ONE);
    if variance.is_sign_negative() {
        return Some(Decimal::ZERO);
    }

    variance.sqrt().map(|std| std.round_dp(DECIMAL_PRECISION))
}

/// Quartile `q` (1..=3) of a sorted, non-empty slice, interpolating linearly
/// between the closest ranks.
fn quartile(sorted: &[Decimal], q: usize) -> Option<Decimal> {
    let position = q * (sorted.len() - 1);
    let lower_index = position / 4;
    let remainder = position % 4;

    let lower = *sorted.get(lower_index)?;
    if remainder == 0 {
        return Some(lower);
    }
    let upper = *sorted.get(lower_index + 1)?;
    let fraction = Decimal::from(remainder) / dec!(4);
    Some(lower + (upper - lower) * fraction)
}
