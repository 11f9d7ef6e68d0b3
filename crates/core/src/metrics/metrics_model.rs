//! Derived metrics shown alongside the generated tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;

/// Headline figures for the overview section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total_value: Decimal,
    /// Mean return in percent; `None` when there are no rows
    pub average_return: Option<Decimal>,
    /// Mean risk in percent; `None` when there are no rows
    pub average_risk: Option<Decimal>,
}

/// An asset's share of the total portfolio value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub asset: AssetKind,
    pub value: Decimal,
    /// Percentage of total portfolio (0-100)
    pub percentage: Decimal,
}

/// Count, mean, spread and quartiles of one numeric column.
///
/// Every field except `count` is `None` for an empty column. `std` is the
/// sample standard deviation and is also `None` for a single value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStatistics {
    pub count: usize,
    pub mean: Option<Decimal>,
    pub std: Option<Decimal>,
    pub min: Option<Decimal>,
    pub p25: Option<Decimal>,
    pub p50: Option<Decimal>,
    pub p75: Option<Decimal>,
    pub max: Option<Decimal>,
}

/// Descriptive statistics for each numeric asset column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub value: DescriptiveStatistics,
    pub return_pct: DescriptiveStatistics,
    pub risk_pct: DescriptiveStatistics,
}
